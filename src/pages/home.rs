use leptos::prelude::*;

use crate::components::grid_particles::GridParticles;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<GridParticles />
			<main class="hero">
				<h1>"Bring your ideas to reality"</h1>
				<p class="tagline">"try pouring your ideas into this prompt"</p>
			</main>
		</ErrorBoundary>
	}
}
