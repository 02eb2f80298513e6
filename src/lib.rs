#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![warn(rust_2018_idioms)]

mod codec;
mod component;
mod ecosystem;
mod error;
mod parse;
mod purl;
mod qualifiers;
mod repo_url;
mod reserved;
mod rules;

pub use component::Component;
pub use ecosystem::Ecosystem;
pub use error::{ArgumentError, Error, PurlError};
pub use parse::Components;
pub use purl::{PackageUrl, PurlObject};
pub use qualifiers::Qualifiers;
pub use repo_url::{download_url, repository_url};
pub use reserved::{builtin_modules, legacy_names};
