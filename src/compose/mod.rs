//! Function composition utilities.
//!
//! - [`identity`]: The identity function, the unit of composition
//!
//! A lifted [`Yoneda`](crate::control::Yoneda) is lowered by applying it to
//! [`identity`].
//!
//! # Examples
//!
//! ```
//! use lambars_coyoneda::compose::identity;
//!
//! let values: Vec<i32> = vec![1, 2, 3].into_iter().map(identity).collect();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

mod utils;

pub use utils::identity;
