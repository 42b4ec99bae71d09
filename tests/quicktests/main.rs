//! Property tests over the public API of `ordtree::Tree`.

mod tree;
