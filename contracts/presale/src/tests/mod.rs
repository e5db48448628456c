
// --- Unit Tests ---
pub mod unit {
    pub mod admin_test;
    pub mod escrow_test;
    pub mod sale_test;
}
