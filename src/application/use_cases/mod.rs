/// Use cases module containing application business logic orchestration
mod analyze_duplication;

pub use analyze_duplication::AnalyzeDuplicationUseCase;
