//! End-to-end tests of the category API live in `tests/`.
