mod concurrent_envelopes;
mod envelope_roundtrip;
mod material_uniqueness;
mod tamper_matrix;
