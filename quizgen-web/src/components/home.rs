use crate::components::credentials::{ApiKeyField, use_api_key};
use crate::components::results::{GlossaryTable, QaList};
use leptos::prelude::*;
use quizgen_core::Quiz;

#[server]
pub async fn generate_quiz(topic: String, api_key: String) -> Result<Quiz, ServerFnError> {
    use std::time::Instant;

    let start = Instant::now();

    let result = crate::server::generate::generate(&topic, &api_key).await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(quiz) => {
            tracing::info!(
                topic = %topic,
                questions = quiz.questions.len(),
                terms = quiz.technical_terms.len(),
                duration_ms = %duration_ms,
                "Quiz generated"
            );
        }
        Err(e) => {
            tracing::error!(
                topic = %topic,
                error = %e,
                duration_ms = %duration_ms,
                "Quiz generation failed"
            );
        }
    }

    result.map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn Home() -> impl IntoView {
    let (topic, set_topic) = signal(String::new());
    let (quiz, set_quiz) = signal(Option::<Quiz>::None);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let api_key = use_api_key();

    // Shared generation function
    let do_generate = move |topic_text: String| {
        if topic_text.trim().is_empty() || loading.get() {
            return;
        }

        // Checked before anything leaves the page: without a key there is
        // no server call at all, just a banner.
        let key = api_key.get();
        if !key.is_present() {
            set_error.set(Some(
                "No API key provided. Enter your OpenAI API key above.".to_string(),
            ));
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        leptos::task::spawn_local(async move {
            match generate_quiz(topic_text, key.key).await {
                Ok(generated) => {
                    set_quiz.set(Some(generated));
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("Error: {}", e)));
                    leptos::logging::error!("API Error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        do_generate(topic.get());
    };

    // Handle Enter key (Shift+Enter for new line)
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_generate(topic.get());
        }
    };

    view! {
        <div class="home-container">
            <header class="hero">
                <h1>"Topic-Based Question Generator"</h1>
                <p class="tagline">"Enter a topic, and AI will generate questions and answers for you."</p>
            </header>

            <form class="topic-form" on:submit=on_submit>
                <ApiKeyField />

                <div class="form-group">
                    <label for="topic-input">"Enter the topic here:"</label>
                    <textarea
                        id="topic-input"
                        class="topic-input"
                        placeholder="Your topic here"
                        rows="3"
                        prop:value=topic
                        on:input=move |ev| set_topic.set(event_target_value(&ev))
                        on:keydown=on_keydown
                        prop:disabled=loading
                    />
                </div>

                <button
                    type="submit"
                    class="generate-button"
                    prop:disabled=move || loading.get() || topic.get().trim().is_empty()
                >
                    {move || if loading.get() {
                        "Generating questions..."
                    } else {
                        "Generate Questions and Answers"
                    }}
                </button>
            </form>

            // Errors
            {move || error.get().map(|err| view! {
                <div class="error-message">
                    <span class="icon">"⚠️"</span>
                    <span>{err}</span>
                </div>
            })}

            // Results, or a warning when the model returned nothing usable
            {move || quiz.get().map(|q| {
                if q.is_empty() {
                    view! {
                        <div class="warning-message">
                            <span class="icon">"⚠️"</span>
                            <span>"No questions or answers found."</span>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="results-container">
                            <QaList quiz=q.clone() />
                            <GlossaryTable quiz=q />
                        </div>
                    }.into_any()
                }
            })}
        </div>
    }
}
