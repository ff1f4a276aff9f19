pub mod fasta;
pub mod fastq;
pub mod reads;

pub use self::reads::{load_queries, load_reference, replicate_queries, QueryRecord};
