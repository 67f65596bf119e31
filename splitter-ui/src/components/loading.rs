//! Loading Placeholder

use leptos::*;

/// Placeholder rows shown until a list arrives
///
/// Each row mirrors a list entry: a wide label bar and a short amount bar.
#[component]
pub fn ListSkeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    view! {
        <div class="animate-pulse divide-y divide-gray-700" aria-busy="true">
            {(0..rows).map(|_| view! {
                <div class="flex items-center justify-between py-3">
                    <div class="bg-gray-700 rounded h-4 w-1/2" />
                    <div class="bg-gray-700 rounded h-4 w-16" />
                </div>
            }).collect_view()}
        </div>
    }
}
