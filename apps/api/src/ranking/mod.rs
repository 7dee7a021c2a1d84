// Resume ranking: text assembly, fuzzy + TF-IDF scoring, blended ranking.
// Everything here is request-scoped; nothing is cached between calls.

pub mod assembler;
pub mod fuzzy;
pub mod handlers;
pub mod ranker;
pub mod scorer;
pub mod tfidf;
