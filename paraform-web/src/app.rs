use gloo_net::http;
use leptos::either::Either;
use leptos::prelude::*;
use tracing::info;

use paraform_model::editor::{EditorState, ParameterIdGenerator};
use paraform_model::model::FormDocument;

use crate::components::{LoadingSpinner, WarningMessage};
use crate::editor::ParameterEditor;

#[derive(thiserror::Error, Clone, Debug)]
#[error("{message}")]
pub struct DocumentLoadError {
    pub message: String,
}

#[component]
pub fn App() -> impl IntoView {

    // The one state container of the session. Child components receive the
    // signal read-only or apply transitions through the pure EditorState
    // operations; nothing mutates entries in place.
    let state = RwSignal::new(EditorState::default());
    let id_generator = RwSignal::new(ParameterIdGenerator::seeded_from(&[]));

    let document_resource = LocalResource::new(move || async move {
        let document = http::Request::get("/data.json")
            .send()
            .await
            .map_err(|_| DocumentLoadError { message: String::from("Could not fetch the parameter document!") })?
            .json::<FormDocument>()
            .await
            .map_err(|_| DocumentLoadError { message: String::from("Could not parse the parameter document!") })?;

        info!("Loaded document with {} parameters.", document.params.len());

        let loaded = EditorState::from(document);
        id_generator.set(ParameterIdGenerator::seeded_from(&loaded.params));
        state.set(loaded);

        Ok::<_, DocumentLoadError>(())
    });

    view! {
        <section class="section">
            <div class="container is-max-tablet">
                <h1 class="title">"Parameters"</h1>
                <Suspense
                    fallback=move || view! { <LoadingSpinner /> }
                >
                {move || Suspend::new(async move {
                    match document_resource.await {
                        Ok(()) => Either::Left(view! {
                            <ParameterEditor state id_generator />
                        }),
                        Err(error) => Either::Right(view! {
                            <WarningMessage>{ error.to_string() }</WarningMessage>
                        }),
                    }
                })}
                </Suspense>
            </div>
        </section>
    }
}
