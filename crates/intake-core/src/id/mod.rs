pub mod id_source;
