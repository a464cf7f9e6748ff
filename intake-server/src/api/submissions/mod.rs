pub mod submissions;
pub mod submit_response;
