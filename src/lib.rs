//! コレクションの隣接要素を `(前, 次)` のペアにして取り出すためのクレート。
//!
//! ```
//! use pairing::{PairedExt, Wrapping};
//!
//! let v = [1, 2, 3];
//! let pairs: Vec<_> = v.paired(Wrapping::FirstLast).into_iter().collect();
//! assert_eq!(pairs, vec![(&1, &2), (&2, &3), (&3, &1)]);
//! ```

mod paired;
mod wrapping;

pub use paired::{Paired, PairedExt, Pairs, paired};
pub use wrapping::{ParseWrappingError, Wrapping};
