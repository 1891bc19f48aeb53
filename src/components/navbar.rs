use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-logo">"instaclean"</a>
            <button
                type="button"
                class="menu-toggle"
                aria-label="Open menu"
                on:click=move |_| set_menu_open.set(true)
            >
                "☰"
            </button>

            <div
                class="sheet-overlay"
                class:open=move || menu_open.get()
                on:click=move |_| set_menu_open.set(false)
            ></div>
            <aside class="sheet" class:open=move || menu_open.get()>
                <ul class="nav-list">
                    <li class="nav-item">
                        <a href="/" class="nav-link">"Home"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/" class="nav-link">"About Us"</a>
                    </li>
                    <li class="nav-item">
                        <a href="/" class="nav-link">"Blog"</a>
                    </li>
                </ul>
                <button type="button" class="btn btn-primary join-btn">"Join Our Team"</button>
                <p class="sheet-footer">"instaclean"</p>
            </aside>
        </nav>
    }
}
