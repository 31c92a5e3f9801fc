//! Rendering of a generated quiz

use crate::utils::plural;
use leptos::prelude::*;
use quizgen_core::Quiz;

/// Enumerated question/answer pairs
#[component]
pub fn QaList(quiz: Quiz) -> impl IntoView {
    let pairs: Vec<(usize, (String, String))> =
        quiz.qa_pairs().into_iter().enumerate().collect();
    let count = pairs.len();

    view! {
        <section class="qa-section">
            <h2 class="section-title">
                {count} " " {plural(count, "question", "questions")}
            </h2>
            <div class="qa-list">
                <For
                    each=move || pairs.clone()
                    key=|(i, _)| *i
                    children=move |(i, (question, answer))| view! {
                        <div class="qa-item">
                            <p class="qa-question">{format!("Q{}: {}", i + 1, question)}</p>
                            <p class="qa-answer">{format!("A{}: {}", i + 1, answer)}</p>
                        </div>
                    }
                />
            </div>
        </section>
    }
}

/// Term/description table
///
/// Renders nothing when the model returned no technical terms: an empty
/// glossary is normal, not an error.
#[component]
pub fn GlossaryTable(quiz: Quiz) -> impl IntoView {
    let rows: Vec<(usize, (String, String))> =
        quiz.term_pairs().into_iter().enumerate().collect();
    let count = rows.len();

    view! {
        {(count > 0).then(|| view! {
            <section class="glossary-section">
                <h2 class="section-title">
                    {count} " technical " {plural(count, "term", "terms")}
                </h2>
                <table class="glossary-table">
                    <thead>
                        <tr>
                            <th>"Term"</th>
                            <th>"Description"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.clone()
                            key=|(i, _)| *i
                            children=move |(_, (term, description))| view! {
                                <tr>
                                    <td class="glossary-term">{term}</td>
                                    <td>{description}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </section>
        })}
    }
}
