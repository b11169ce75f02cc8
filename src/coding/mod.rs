mod trimmer;

pub use trimmer::{clean_nucleotides, CodingRegionTrimmer, StartScan, START_CODON};
