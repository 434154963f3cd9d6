//! # Model and Token-Id IO
//!
//! * Model files: JSON records of the config, the id-ordered vocabulary,
//!   and the merge history; see [`save_model_path`] and [`load_model_path`].
//! * Token-id files: whitespace-separated ids; see [`save_token_ids_path`]
//!   and [`load_token_ids_path`].
//!
//! Path writers are atomic; a failed write leaves no partial file behind.
//!
//! ## Loading A Model
//!
//! ```rust,no_run
//! use mergetok::{Tokenizer, io::{load_model_path, load_token_ids_path}};
//!
//! fn example() -> mergetok::MTResult<String> {
//!     let model = load_model_path::<u32, _>("story.enc")?;
//!     let ids = load_token_ids_path::<u32, _>("story.tok")?;
//!
//!     Tokenizer::from_model(model).decode(&ids)
//! }
//! ```

mod atomic_file;
mod model_store;
mod token_ids;

#[doc(inline)]
pub use atomic_file::write_atomic;
#[doc(inline)]
pub use model_store::*;
#[doc(inline)]
pub use token_ids::*;
