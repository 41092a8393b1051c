//! Compile Module
//!
//! Turns layout files into holder classes.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`CompileOptions`)
//! - `result` - Result types (`CompileResult`)
//! - `use_case` - Core use case logic (`HoldrCompiler`)
//!
//! ## Usage
//!
//! ```ignore
//! use holdr::application::compile::{CompileOptions, HoldrCompiler};
//! use holdr::infrastructure::LocalFs;
//!
//! let compiler = HoldrCompiler::new(LocalFs::new(), CompileOptions::new("com.example.app"));
//! let result = compiler.compile(&[PathBuf::from("src/main/res")])?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::CompileOptions;
pub use result::CompileResult;
pub use use_case::HoldrCompiler;
