//! Page-level errors and the template that renders them.

use http::status::StatusCode;
use leptos::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders collected errors as a branded page and, on the server, sets the
/// response status from the first error.
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => errors.unwrap_or_else(|| create_rw_signal(Errors::default())),
    };
    let mut errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect();
    if errors.is_empty() {
        errors.push(AppError::NotFound);
    }

    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(errors[0].status_code());
        }
    }

    view! {
        <section class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md text-center">
                {errors
                    .into_iter()
                    .map(|error| {
                        let code = error.status_code().as_u16();
                        view! {
                            <div class="mb-8">
                                <div class="text-6xl font-bold text-gray-900 mb-2">{code}</div>
                                <p class="text-lg text-gray-600">{error.to_string()}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a
                    href="/"
                    class="inline-block px-6 py-3 bg-gray-900 hover:bg-gray-800 text-white font-semibold rounded-2xl transition"
                >
                    "Back to MCGrowth"
                </a>
            </div>
        </section>
    }
}
