//! dupe-report - duplication report generator for pattern-match results
//!
//! This library turns the raw hits of a structural pattern search into a
//! duplication report: code blocks, groups of identical blocks,
//! consolidation suggestions and summary metrics. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`duplication`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dupe_report::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let input_reader = StdinReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = AnalyzeDuplicationUseCase::new(
//!     input_reader,
//!     progress_reporter,
//!     PipelineConfig::default(),
//! );
//!
//! // Execute
//! let response = use_case.execute()?;
//!
//! // Format and present output
//! let output = JsonReportFormatter::new().format(&response.report)?;
//! StdoutPresenter::new().present(&output)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod duplication;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::formatters::JsonReportFormatter;
    pub use crate::adapters::outbound::stdio::{StdinReader, StdoutPresenter};
    pub use crate::application::dto::{AnalysisRequest, AnalysisResponse};
    pub use crate::application::use_cases::AnalyzeDuplicationUseCase;
    pub use crate::config::PipelineConfig;
    pub use crate::duplication::domain::{
        CodeBlock, ConsolidationStrategy, ConsolidationSuggestion, DuplicateGroup,
        DuplicationReport, RepositoryInfo, ScanMetrics, SemanticCategory,
    };
    pub use crate::duplication::policies::SuggestionPolicy;
    pub use crate::duplication::services::{
        BlockExtractor, DuplicateGrouper, MetricsCalculator, SuggestionGenerator,
    };
    pub use crate::ports::inbound::DuplicationAnalysisPort;
    pub use crate::ports::outbound::{
        InputReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::Result;
}
