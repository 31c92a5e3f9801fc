/// English plural forms helper
///
/// # Examples
/// ```
/// use quizgen_web::utils::plural;
/// assert_eq!(plural(1, "question", "questions"), "question");
/// assert_eq!(plural(2, "question", "questions"), "questions");
/// assert_eq!(plural(0, "term", "terms"), "terms");
/// ```
#[must_use]
pub fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
