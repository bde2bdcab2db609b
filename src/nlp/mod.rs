//! Natural Language Processing components
//!
//! This module provides Unicode normalization, script filtering, sentence
//! segmentation, and stopword filtering for Arabic-script Sindhi text.

pub mod normalize;
pub mod script_filter;
pub mod segmenter;
pub mod stopwords;
