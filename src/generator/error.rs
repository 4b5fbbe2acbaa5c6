use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("base template has no start marker")]
    MissingStart,

    #[error("could not plant {min_goals} goals in {attempts} attempts")]
    GoalsUnreachable { min_goals: usize, attempts: usize },

    #[error("could not plant {goals} boxes in {attempts} attempts")]
    BoxesUnreachable { goals: usize, attempts: usize },

    #[error("no base templates to generate from")]
    NoBaseTemplates,

    #[error("none of the {templates} base templates produced a valid level")]
    Exhausted { templates: usize },
}
