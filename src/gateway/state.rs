use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::ledger::LedgerSink;
use crate::oracle::Oracle;
use crate::review::ClaimReviewAssembler;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,

    pub ledger: Arc<dyn LedgerSink>,

    pub assembler: ClaimReviewAssembler,
}

impl AppState {
    pub fn new(oracle: Arc<dyn Oracle>, ledger: Arc<dyn LedgerSink>) -> Self {
        Self {
            analyzer: Analyzer::new(oracle),
            ledger,
            assembler: ClaimReviewAssembler::default(),
        }
    }

    pub fn with_assembler(mut self, assembler: ClaimReviewAssembler) -> Self {
        self.assembler = assembler;
        self
    }
}
