//! Safe incremental rendering support for streaming markdown.
//!
//! A buffer that grows token-by-token is never handed to a markdown parser
//! directly: half-written links, open emphasis runs and unterminated fences
//! would render as garbage and then jump around as they complete. The
//! classifier in this crate promotes only syntactically safe prefixes,
//! standing a named marker in for whatever construct is still arriving.
//!
//! ```
//! use markdown_streamgate_engine::{Classifier, StreamState};
//!
//! let classifier = Classifier::new();
//! let mut state = StreamState::new();
//!
//! // The half-written link stays hidden...
//! assert_eq!(classifier.advance(&mut state, "a [half"), "a ");
//! // ...and surfaces literally once it completes.
//! assert_eq!(classifier.advance(&mut state, "a [half](x)"), "a [half](x)");
//! ```

pub mod guard;
pub mod placeholder;
pub mod reveal;
pub mod stream;

pub use placeholder::PlaceholderBindings;
pub use stream::{Classifier, ConstructKind, StreamState};
