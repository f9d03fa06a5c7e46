use gloo_timers::callback::Timeout;
use log::{info, Level};
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod load;
mod materials;
mod observe;
mod components {
    pub mod animated_card;
    pub mod loading_screen;
    pub mod nav;
}
mod pages {
    pub mod home;
}

use components::loading_screen::LoadingScreen;
use components::nav::Nav;
use load::LoadPhase;
use pages::home::Home;

// Page-singleton stylesheet: animation keyframes plus the reveal and
// load-transition classes. Mounted once by the app shell; stylist's
// managed registry removes it on unmount and guards against double
// registration.
const GLOBAL_CSS: &str = r#"
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes fadeInUp {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }
    @keyframes slideInLeft {
        from { opacity: 0; transform: translateX(-100px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes slideInRight {
        from { opacity: 0; transform: translateX(100px); }
        to { opacity: 1; transform: translateX(0); }
    }
    @keyframes scaleUp {
        from { opacity: 0; transform: scale(0.8); }
        to { opacity: 1; transform: scale(1); }
    }
    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    @keyframes pulse {
        0% { opacity: 1; }
        50% { opacity: 0.5; }
        100% { opacity: 1; }
    }

    .animate-fade-in { animation: fadeIn 1s ease-out forwards; }
    .animate-fade-in-up { opacity: 0; animation: fadeInUp 1s ease-out forwards; }
    .animate-slide-in-left { opacity: 0; animation: slideInLeft 1s ease-out forwards; }
    .animate-slide-in-right { opacity: 0; animation: slideInRight 1s ease-out forwards; }
    .animate-scale-up { animation: scaleUp 0.5s ease-out forwards; }
    .animate-spin { animation: spin 1s linear infinite; }
    .animate-pulse { animation: pulse 2s ease-in-out infinite; }

    .animated-card {
        opacity: 0;
        transform: translateY(2.5rem);
    }
    .animated-card.revealed {
        opacity: 1;
        transform: translateY(0);
    }

    .loading-screen {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        bottom: 0;
        z-index: 50;
        background: #18181b;
        display: flex;
        align-items: center;
        justify-content: center;
        opacity: 1;
        transition: opacity 0.5s ease;
    }
    .loading-screen-done {
        opacity: 0;
        pointer-events: none;
    }
    .loading-screen-inner {
        text-align: center;
    }
    .loading-mark {
        display: inline-block;
        font-size: 3rem;
        color: #f59e0b;
        margin-bottom: 1rem;
    }
    .loading-brand {
        color: #fff;
        font-size: 1.5rem;
        font-weight: 700;
    }

    .page-content {
        min-height: 100vh;
        opacity: 0;
        transition: opacity 0.5s ease;
    }
    .page-content.loaded {
        opacity: 1;
    }

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        z-index: 40;
        background: transparent;
        transition: background 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: linear-gradient(90deg, #581c87, #1e3a8a);
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
    }
    .nav-content {
        max-width: 72rem;
        margin: 0 auto;
        padding: 0 1rem;
        height: 4rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        color: #fff;
        font-size: 1.5rem;
        font-weight: 700;
        text-decoration: none;
        display: flex;
        align-items: center;
    }
    .nav-logo-mark {
        margin-right: 0.5rem;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link {
        color: #fff;
        text-decoration: none;
        transition: color 0.2s ease;
    }
    .nav-link:hover {
        color: #4ade80;
    }
    .burger-menu {
        display: none;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.5rem;
    }
    .burger-menu span {
        display: block;
        width: 1.5rem;
        height: 2px;
        background: #fff;
        margin: 5px 0;
    }
    @media (max-width: 950px) {
        .burger-menu {
            display: block;
        }
        .nav-links {
            display: none;
        }
        .nav-links.mobile-menu-open {
            display: flex;
            flex-direction: column;
            gap: 0;
            position: absolute;
            top: 4rem;
            left: 0;
            width: 100%;
            background: linear-gradient(90deg, #581c87, #1e3a8a);
            padding: 0.5rem 1rem 1rem;
        }
        .nav-links.mobile-menu-open .nav-link {
            padding: 0.5rem 0;
        }
    }
"#;

#[function_component(App)]
fn app() -> Html {
    let phase = use_state(|| LoadPhase::Loading);

    // One pending timeout at a time; re-armed whenever the phase
    // advances, cancelled (dropped) on teardown or phase change.
    {
        let current_phase = *phase;
        let phase = phase.clone();
        use_effect_with_deps(
            move |current: &LoadPhase| {
                let pending = current.delay_to_next().map(|delay| {
                    let next = current.next();
                    let phase = phase.clone();
                    Timeout::new(delay, move || {
                        info!("page load phase -> {:?}", next);
                        phase.set(next);
                    })
                });
                move || drop(pending)
            },
            current_phase,
        );
    }

    html! {
        <>
            <Global css={GLOBAL_CSS} />
            <LoadingScreen phase={*phase} />
            <div class={classes!("page-content", phase.content_shown().then(|| "loaded"))}>
                <Nav />
                <Home />
            </div>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");
    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
