//! Matchers for the multiple choice interaction. Answers are choice indices.

pub fn equals(answer: &u32, x: &u32) -> bool {
    answer == x
}
