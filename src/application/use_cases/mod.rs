/// Use cases - application workflows driving the domain
mod find_dependents;

pub use find_dependents::FindDependentsUseCase;
