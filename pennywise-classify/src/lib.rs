//! pennywise-classify: trains the category model from the seed corpus and
//! classifies expense descriptions

pub mod classifier;
pub mod corpus;
pub mod model;
pub mod normalize;
pub mod stopwords;
pub mod vectorizer;

pub use classifier::{
    Classification, ClassifyError, ExpenseClassifier, TrainingError,
};
pub use corpus::{SeedExample, load_corpus_csv, seed_corpus};
pub use model::MultinomialLogit;
pub use normalize::TextNormalizer;
pub use vectorizer::TfIdfVectorizer;
