//! # huffpack
//!
//! Static Huffman compression of byte streams into a self-describing
//! container.
//!
//! ```rust
//! let packed = huffpack::encode(b"abracadabra")?;
//! assert!(huffpack::is_encoded(&packed));
//! assert_eq!(huffpack::decode(&packed)?, b"abracadabra");
//! # Ok::<(), huffpack::Error>(())
//! ```

pub mod codes;
pub mod container;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod file;
pub mod frequency;
pub mod header;
pub mod logger;
pub mod report;
pub mod tree;

// Internal modules - not part of public API
mod bits;
mod queue;

pub use codes::{CodeEntry, CodeTable};
pub use container::{is_encoded, MAGIC};
pub use decoder::{decode, decode_detailed, Decoding};
pub use encoder::{encode, encode_detailed, EncodeStats, Encoding};
pub use error::{Error, Result};
pub use file::{process, process_file, Mode, Outcome};
pub use frequency::SymbolCounts;
pub use tree::{HuffmanTree, Node};
