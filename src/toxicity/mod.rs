// Tokenized toxic-phrase detection.
//
// Raw substring matching over-triggers ("ass" inside "class"), so both the
// phrase lists and the query text are normalized into the same space-padded
// token form before matching.

pub mod list;
pub mod normalize;
pub mod tokenizer;
