use leptos::prelude::*;

/// Inline SVG icon (lucide outlines) by name; unknown names render nothing.
pub fn icon(name: &str) -> AnyView {
    icon_sized(name, 20)
}

pub fn icon_sized(name: &str, size: u32) -> AnyView {
    let paths = match name {
        "x" => view! {
            <path d="M18 6 6 18"/>
            <path d="m6 6 12 12"/>
        }
        .into_any(),
        "check" => view! { <path d="M20 6 9 17l-5-5"/> }.into_any(),
        "alert" => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 8v4"/>
            <path d="M12 16h.01"/>
        }
        .into_any(),
        "play" => view! { <polygon points="6 3 20 12 6 21 6 3"/> }.into_any(),
        "trash" => view! {
            <path d="M3 6h18"/>
            <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/>
            <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>
        }
        .into_any(),
        "eye" => view! {
            <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7z"/>
            <circle cx="12" cy="12" r="3"/>
        }
        .into_any(),
        "search" => view! {
            <circle cx="11" cy="11" r="8"/>
            <path d="m21 21-4.3-4.3"/>
        }
        .into_any(),
        "menu" => view! {
            <path d="M4 6h16"/>
            <path d="M4 12h16"/>
            <path d="M4 18h16"/>
        }
        .into_any(),
        "map-pin" => view! {
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z"/>
            <circle cx="12" cy="10" r="3"/>
        }
        .into_any(),
        "lock" => view! {
            <rect x="3" y="11" width="18" height="11" rx="2"/>
            <path d="M7 11V7a5 5 0 0 1 10 0v4"/>
        }
        .into_any(),
        "logout" => view! {
            <path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/>
            <path d="m16 17 5-5-5-5"/>
            <path d="M21 12H9"/>
        }
        .into_any(),
        "plus" => view! {
            <path d="M12 5v14"/>
            <path d="M5 12h14"/>
        }
        .into_any(),
        "video" => view! {
            <path d="m22 8-6 4 6 4V8z"/>
            <rect x="2" y="6" width="14" height="12" rx="2"/>
        }
        .into_any(),
        "radio" => view! {
            <circle cx="12" cy="12" r="2"/>
            <path d="M16.24 7.76a6 6 0 0 1 0 8.49"/>
            <path d="M7.76 16.24a6 6 0 0 1 0-8.49"/>
            <path d="M19.07 4.93a10 10 0 0 1 0 14.14"/>
            <path d="M4.93 19.07a10 10 0 0 1 0-14.14"/>
        }
        .into_any(),
        "users" => view! {
            <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
            <circle cx="9" cy="7" r="4"/>
            <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
            <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
        }
        .into_any(),
        "award" => view! {
            <circle cx="12" cy="8" r="6"/>
            <path d="M15.48 12.89 17 22l-5-3-5 3 1.52-9.11"/>
        }
        .into_any(),
        "calendar" => view! {
            <rect x="3" y="4" width="18" height="18" rx="2"/>
            <path d="M16 2v4"/>
            <path d="M8 2v4"/>
            <path d="M3 10h18"/>
        }
        .into_any(),
        "clock" => view! {
            <circle cx="12" cy="12" r="10"/>
            <path d="M12 6v6l4 2"/>
        }
        .into_any(),
        "message" => view! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>
        }
        .into_any(),
        "car" => view! {
            <path d="M19 17h2v-5l-3-5H6L3 12v5h2"/>
            <circle cx="7" cy="17" r="2"/>
            <circle cx="17" cy="17" r="2"/>
            <path d="M9 17h6"/>
        }
        .into_any(),
        _ => return ().into_any(),
    };

    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {paths}
        </svg>
    }
    .into_any()
}
