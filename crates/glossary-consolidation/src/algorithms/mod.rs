//! Consolidation algorithms: name normalization, sentence splitting, word overlap, collation.

pub mod collation;
pub mod name_normalizer;
pub mod sentence_splitter;
pub mod similarity;
