//! The single page: hero, features grid, accepted-materials catalog,
//! contact panel, footer. All copy comes from `config` and
//! `materials`; the only behavior on this page is the reveal cards.

use yew::prelude::*;

use crate::components::animated_card::AnimatedCard;
use crate::config;
use crate::materials::{self, MaterialGroup};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                    .home-page {
                        color: #27272a;
                        background: #fafafa;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: linear-gradient(135deg, #18181b, #292524, #171717);
                        text-align: center;
                        padding: 0 1rem;
                    }
                    .hero-content h1 {
                        font-size: 3.5rem;
                        color: #fff;
                        margin-bottom: 1.5rem;
                    }
                    .hero-content h1 .accent {
                        color: #f59e0b;
                    }
                    .hero-subtitle {
                        font-size: 1.5rem;
                        color: #e5e7eb;
                        margin-bottom: 2rem;
                    }
                    .hero-cta {
                        display: inline-block;
                        background: linear-gradient(90deg, #f59e0b, #d97706);
                        color: #fff;
                        padding: 0.75rem 2rem;
                        border-radius: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                        transition: transform 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .features-section {
                        padding: 4rem 1rem;
                        background: #f4f4f5;
                    }
                    .features-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-card {
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        text-align: center;
                    }
                    .feature-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        border-radius: 9999px;
                        background: #fef3c7;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                    }
                    .feature-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .feature-card p {
                        color: #52525b;
                    }
                    .materials-section {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 4rem 1rem;
                    }
                    .materials-heading {
                        text-align: center;
                        font-size: 1.875rem;
                        margin-bottom: 3rem;
                        background: linear-gradient(90deg, #d97706, #92400e);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .material-group {
                        margin-bottom: 3rem;
                    }
                    .material-group > h2 {
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                        background: linear-gradient(90deg, #d97706, #92400e);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .material-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    .material-card {
                        background: #fff;
                        padding: 1.5rem;
                        border-radius: 0.75rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: box-shadow 0.3s ease;
                        height: 100%;
                    }
                    .material-card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .material-card h3 {
                        font-size: 1.25rem;
                        color: #92400e;
                        margin-bottom: 1rem;
                    }
                    .material-card ul {
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .material-card li {
                        display: flex;
                        align-items: center;
                        color: #3f3f46;
                        margin-bottom: 0.5rem;
                    }
                    .material-card .bullet {
                        color: #f59e0b;
                        margin-right: 0.5rem;
                    }
                    .contact-section {
                        position: relative;
                        padding: 4rem 1rem;
                        background: linear-gradient(90deg, rgba(24, 24, 27, 0.95), rgba(24, 24, 27, 0.95)), #3f3f46;
                        color: #fff;
                    }
                    .contact-section h2 {
                        text-align: center;
                        font-size: 1.875rem;
                        margin-bottom: 3rem;
                    }
                    .contact-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .contact-card {
                        text-align: center;
                        padding: 1.5rem;
                        background: rgba(255, 255, 255, 0.1);
                        backdrop-filter: blur(12px);
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: border-color 0.3s ease;
                    }
                    .contact-card:hover {
                        border-color: rgba(245, 158, 11, 0.3);
                    }
                    .contact-card .contact-icon {
                        font-size: 2rem;
                        color: #fbbf24;
                        margin-bottom: 1rem;
                    }
                    .contact-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.5rem;
                    }
                    .site-footer {
                        background: #18181b;
                        color: #fff;
                        padding: 2rem 1rem;
                        text-align: center;
                    }
                    @media (max-width: 950px) {
                        .hero-content h1 {
                            font-size: 2.25rem;
                        }
                        .hero-subtitle {
                            font-size: 1.25rem;
                        }
                        .features-grid,
                        .material-grid,
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <Hero />
            <Features />
            <section id="materials" class="materials-section">
                <h2 class="materials-heading animate-scale-up">{"Materials We Accept"}</h2>
                <MaterialSection group={&materials::NON_FERROUS} />
                <MaterialSection group={&materials::FERROUS} />
            </section>
            <Contact />
            <footer class="site-footer">
                <p>{config::FOOTER_NOTICE}</p>
            </footer>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header id="home" class="hero">
            <div class="hero-content">
                <h1 class="animate-slide-in-left" style="animation-delay: 0.3s;">
                    {"Transform Your "}
                    <span class="accent">{"Metal"}</span>
                    {" into Value"}
                </h1>
                <p class="hero-subtitle animate-slide-in-right" style="animation-delay: 0.6s;">
                    {config::TAGLINE}
                </p>
                <div class="animate-fade-in-up" style="animation-delay: 0.9s;">
                    <a href="#contact" class="hero-cta">{"Get Started →"}</a>
                </div>
            </div>
        </header>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="features-section">
            <div class="features-grid">
                { for config::FEATURES.iter().map(|feature| html! {
                    <AnimatedCard key={feature.title} delay_ms={feature.reveal_delay_ms}>
                        <div class="feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.blurb}</p>
                        </div>
                    </AnimatedCard>
                })}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct MaterialSectionProps {
    group: &'static MaterialGroup,
}

#[function_component(MaterialSection)]
fn material_section(props: &MaterialSectionProps) -> Html {
    html! {
        <div class="material-group">
            <h2>{props.group.title}</h2>
            <div class="material-grid">
                { for props.group.categories.iter().enumerate().map(|(index, category)| html! {
                    <AnimatedCard key={category.name} delay_ms={index as u32 * 100}>
                        <div class="material-card">
                            <h3>{category.name}</h3>
                            <ul>
                                { for category.items.iter().map(|item| html! {
                                    <li>
                                        <span class="bullet">{"•"}</span>
                                        {*item}
                                    </li>
                                })}
                            </ul>
                        </div>
                    </AnimatedCard>
                })}
            </div>
        </div>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="contact-section">
            <h2>{"Get in Touch"}</h2>
            <div class="contact-grid">
                <AnimatedCard delay_ms={200}>
                    <div class="contact-card">
                        <div class="contact-icon">{"📞"}</div>
                        <h3>{"Call Us"}</h3>
                        <p>{config::PHONE}</p>
                    </div>
                </AnimatedCard>
                <AnimatedCard delay_ms={400}>
                    <div class="contact-card">
                        <div class="contact-icon">{"✉"}</div>
                        <h3>{"Email Us"}</h3>
                        <p>{config::EMAIL}</p>
                    </div>
                </AnimatedCard>
                <AnimatedCard delay_ms={600}>
                    <div class="contact-card">
                        <div class="contact-icon">{"📍"}</div>
                        <h3>{"Visit Us"}</h3>
                        <p>
                            {config::ADDRESS_LINES[0]}
                            <br />
                            {config::ADDRESS_LINES[1]}
                        </p>
                    </div>
                </AnimatedCard>
            </div>
        </section>
    }
}
