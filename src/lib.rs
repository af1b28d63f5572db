//! `tritium` is a semi-modular toolkit for analysing tritium release from
//! BABY breeding blanket experiments
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use tritium_units as units;

#[doc(inline)]
pub use tritium_utils as utils;

#[cfg(feature = "lsc")]
#[cfg_attr(docsrs, doc(cfg(feature = "lsc")))]
#[doc(inline)]
pub use tritium_lsc as lsc;

#[cfg(feature = "model")]
#[cfg_attr(docsrs, doc(cfg(feature = "model")))]
#[doc(inline)]
pub use tritium_model as model;
