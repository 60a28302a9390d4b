//! Benchmarks for `automat`, see `benches/format.rs`.
