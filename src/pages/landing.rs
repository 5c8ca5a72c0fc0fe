use yew::prelude::*;

use crate::components::footer::Footer;
use crate::state::section::{scroll_to, Section};
use crate::state::wizard::BadgeLevel;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Opens the application modal. Owned by the app root so the modal can
    /// outlive scrolling around the page.
    pub on_apply: Callback<()>,
}

/// The whole marketing page, one anchored section after another. Section ids
/// line up with [`Section::ALL`] so the nav tracker can find them.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    html! {
        <main class="landing">
            <Hero on_apply={props.on_apply.clone()} />
            <Features />
            <Process />
            <Badges on_apply={props.on_apply.clone()} />
            <Partners />
            <Testimonials />
            <CtaBand on_apply={props.on_apply.clone()} />
            <Footer />

            <style>
                {r#"
                .landing {
                    padding-top: 64px;
                }

                .section-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .section-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .section-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .primary-button {
                    background: #1d4ed8;
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .primary-button:hover {
                    background: #1e40af;
                }

                .outline-button {
                    background: transparent;
                    color: #1d4ed8;
                    border: 2px solid #1d4ed8;
                    border-radius: 9999px;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .outline-button:hover {
                    background: #1d4ed8;
                    color: #fff;
                }
                "#}
            </style>
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct ApplyProps {
    on_apply: Callback<()>,
}

// -- Hero --------------------------------------------------------------------

#[function_component(Hero)]
fn hero(props: &ApplyProps) -> Html {
    let open_form = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(()))
    };

    let view_stories =
        Callback::from(|_: MouseEvent| scroll_to(Section::Testimonials));

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="section-inner hero-grid">
                <div class="hero-copy">
                    <h1>
                        {"The Global Standard for "}
                        <span class="accent">{"Fintech Excellence"}</span>
                    </h1>
                    <p>
                        {"FinStamp certifies innovative fintech startups worldwide, \
                          providing credibility that investors trust and markets recognize."}
                    </p>
                    <div class="hero-cta-row">
                        <button class="primary-button" onclick={open_form}>
                            {"Get Certified →"}
                        </button>
                        <button class="outline-button" onclick={view_stories}>
                            {"▶ View Success Stories"}
                        </button>
                    </div>
                    <div class="hero-stats">
                        <div class="stat">
                            <div class="stat-value">{"500+"}</div>
                            <div class="stat-label">{"Trusted Investors"}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-value">{"$2B+"}</div>
                            <div class="stat-label">{"Funding Raised"}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-value">{"150+"}</div>
                            <div class="stat-label">{"Certified Startups"}</div>
                        </div>
                    </div>
                </div>

                <div class="hero-badges">
                    { for BadgeLevel::ALL.iter().map(|&badge| html! {
                        <div class={classes!("hero-badge-card", badge.as_str())}>
                            <div class="hero-badge-icon">{badge.icon()}</div>
                            <h3>{badge.title()}</h3>
                            <p>{"Certification Level"}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    padding: 4rem 0 5rem;
                    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
                    overflow: hidden;
                }

                .hero-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy h1 {
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #111827;
                    line-height: 1.15;
                    margin-bottom: 1rem;
                }

                .hero-copy h1 .accent {
                    color: #1d4ed8;
                }

                .hero-copy > p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .hero-cta-row {
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }

                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                    padding-top: 2rem;
                    margin-top: 2rem;
                }

                .stat {
                    text-align: center;
                }

                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #1d4ed8;
                }

                .stat-label {
                    font-size: 0.875rem;
                    color: #4b5563;
                }

                .hero-badges {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .hero-badge-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    color: #fff;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.15);
                    transition: transform 0.2s ease;
                }

                .hero-badge-card:hover {
                    transform: translateY(-6px);
                }

                .hero-badge-card.innovation {
                    background: linear-gradient(90deg, #fbbf24, #d97706);
                }

                .hero-badge-card.disruption {
                    background: linear-gradient(90deg, #9ca3af, #4b5563);
                }

                .hero-badge-card.global-impact {
                    background: linear-gradient(90deg, #facc15, #ca8a04);
                }

                .hero-badge-icon {
                    font-size: 2.25rem;
                    margin-bottom: 0.5rem;
                }

                .hero-badge-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .hero-badge-card p {
                    color: rgba(255, 255, 255, 0.8);
                }

                @media (max-width: 950px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero-copy h1 {
                        font-size: 2.5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

// -- Features ----------------------------------------------------------------

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🏆",
        title: "Global Recognition",
        description: "Trusted by 500+ investors and accelerators worldwide",
        accent: "feature-blue",
    },
    Feature {
        icon: "🛡️",
        title: "Blockchain Verified",
        description: "Immutable proof of certification on Polygon network",
        accent: "feature-green",
    },
    Feature {
        icon: "🚀",
        title: "Investor Ready",
        description: "Certified startups receive 3x more investor interest",
        accent: "feature-purple",
    },
    Feature {
        icon: "💼",
        title: "Enterprise Support",
        description: "$100K+ in credits from Google, Microsoft, AWS",
        accent: "feature-orange",
    },
];

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id={Section::Features.id()} class="features">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Why FinStamp Matters"}</h2>
                    <p>{"We're transforming how fintech startups gain credibility and access to resources"}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class={classes!("feature-icon", feature.accent)}>
                                {feature.icon}
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .features {
                    padding: 5rem 0;
                    background: #fff;
                }

                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .feature-card {
                    background: #f9fafb;
                    padding: 2rem;
                    border-radius: 16px;
                    text-align: center;
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .feature-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                }

                .feature-icon {
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin: 0 auto 1rem;
                }

                .feature-blue { background: #dbeafe; }
                .feature-green { background: #dcfce7; }
                .feature-purple { background: #f3e8ff; }
                .feature-orange { background: #ffedd5; }

                .feature-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .feature-card p {
                    color: #4b5563;
                }

                @media (max-width: 950px) {
                    .feature-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 600px) {
                    .feature-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

// -- Process -----------------------------------------------------------------

struct ProcessStep {
    number: u8,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        number: 1,
        icon: "🎯",
        title: "Apply",
        description: "Submit your startup details and documentation through our streamlined application process",
    },
    ProcessStep {
        number: 2,
        icon: "✅",
        title: "Validate",
        description: "Our AI and expert panel review your innovation, business model, and market potential",
    },
    ProcessStep {
        number: 3,
        icon: "🏆",
        title: "Certify",
        description: "Receive your digital and physical badge with blockchain verification and investor access",
    },
];

#[function_component(Process)]
fn process() -> Html {
    html! {
        <section id={Section::Process.id()} class="process">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Simple 3-Step Certification"}</h2>
                    <p>{"Get from idea to investor-ready in record time"}</p>
                </div>
                <div class="process-grid">
                    { for PROCESS_STEPS.iter().map(|step| html! {
                        <div class="process-step">
                            <div class="process-card">
                                <div class="process-number">{step.number}</div>
                                <div class="process-icon">{step.icon}</div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                            {
                                if step.number < 3 {
                                    html! { <div class="process-arrow">{"→"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .process {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, #eff6ff, #e0e7ff);
                }

                .process-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .process-step {
                    position: relative;
                }

                .process-card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 16px;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                    text-align: center;
                }

                .process-number {
                    width: 64px;
                    height: 64px;
                    background: #1d4ed8;
                    color: #fff;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 auto 1.5rem;
                }

                .process-icon {
                    width: 48px;
                    height: 48px;
                    background: #dbeafe;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.25rem;
                    margin: 0 auto 1rem;
                }

                .process-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 1rem;
                }

                .process-card p {
                    color: #4b5563;
                }

                .process-arrow {
                    position: absolute;
                    top: 50%;
                    right: -1.5rem;
                    transform: translateY(-50%);
                    font-size: 1.75rem;
                    color: #1d4ed8;
                }

                @media (max-width: 950px) {
                    .process-grid {
                        grid-template-columns: 1fr;
                    }

                    .process-arrow {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

// -- Badges / pricing --------------------------------------------------------

fn tier_features(badge: BadgeLevel) -> [&'static str; 5] {
    match badge {
        BadgeLevel::Innovation => [
            "Proof of concept validated",
            "Basic business model",
            "Access to testing sandbox",
            "$50K in cloud credits",
            "Mentorship program access",
        ],
        BadgeLevel::Disruption => [
            "Market differentiation verified",
            "Scalability confirmed",
            "Investor-ready certification",
            "$100K in partner credits",
            "VC introduction program",
        ],
        BadgeLevel::GlobalImpact => [
            "World-class innovation",
            "Proven scalability",
            "Institutional investor approved",
            "$200K+ in enterprise support",
            "Board advisor matching",
        ],
    }
}

#[function_component(Badges)]
fn badges(props: &ApplyProps) -> Html {
    html! {
        <section id={Section::Badges.id()} class="badges">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Three Levels of Excellence"}</h2>
                    <p>{"Choose the certification level that matches your startup's maturity"}</p>
                </div>
                <div class="badge-grid">
                    { for BadgeLevel::ALL.iter().map(|&badge| {
                        let onclick = {
                            let on_apply = props.on_apply.clone();
                            Callback::from(move |_: MouseEvent| on_apply.emit(()))
                        };
                        let popular = badge == BadgeLevel::Disruption;
                        html! {
                            <div class={classes!("badge-card", popular.then_some("popular"))}>
                                {
                                    if popular {
                                        html! { <span class="popular-tag">{"Most Popular"}</span> }
                                    } else {
                                        html! {}
                                    }
                                }
                                <div class="badge-card-header">
                                    <div class="badge-card-icon">{badge.icon()}</div>
                                    <h3>{badge.name()}</h3>
                                    <div class="badge-card-price">{badge.price()}</div>
                                </div>
                                <ul class="badge-feature-list">
                                    { for tier_features(badge).iter().map(|feature| html! {
                                        <li>
                                            <span class="check">{"✓"}</span>
                                            <span>{*feature}</span>
                                        </li>
                                    }) }
                                </ul>
                                <button class="primary-button badge-card-cta" {onclick}>
                                    {"Get Started"}
                                </button>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .badges {
                    padding: 5rem 0;
                    background: #fff;
                }

                .badge-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .badge-card {
                    position: relative;
                    background: #fff;
                    border: 2px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s ease, box-shadow 0.3s ease;
                }

                .badge-card:hover {
                    transform: translateY(-10px);
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.12);
                }

                .badge-card.popular {
                    border-color: #9ca3af;
                }

                .popular-tag {
                    position: absolute;
                    top: -14px;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #1d4ed8;
                    color: #fff;
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 500;
                }

                .badge-card-header {
                    text-align: center;
                    margin-bottom: 1.5rem;
                }

                .badge-card-icon {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .badge-card-header h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .badge-card-price {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #1d4ed8;
                }

                .badge-feature-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }

                .badge-feature-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #4b5563;
                }

                .badge-feature-list .check {
                    color: #22c55e;
                    font-weight: 700;
                }

                .badge-card-cta {
                    width: 100%;
                    padding: 0.75rem 1.5rem;
                    font-size: 1rem;
                }

                @media (max-width: 950px) {
                    .badge-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

// -- Partners ----------------------------------------------------------------

struct Partner {
    name: &'static str,
    logo: &'static str,
    credits: &'static str,
}

const PARTNERS: [Partner; 6] = [
    Partner { name: "Google Cloud", logo: "🌐", credits: "$100K" },
    Partner { name: "Microsoft Azure", logo: "☁️", credits: "$75K" },
    Partner { name: "AWS", logo: "🚀", credits: "$50K" },
    Partner { name: "Stripe", logo: "💳", credits: "Free Processing" },
    Partner { name: "Polygon", logo: "🔷", credits: "Blockchain Verification" },
    Partner { name: "Y Combinator", logo: "🚀", credits: "Accelerator Access" },
];

#[function_component(Partners)]
fn partners() -> Html {
    html! {
        <section id={Section::Partners.id()} class="partners">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Trusted by Industry Leaders"}</h2>
                    <p>{"Our partners provide exclusive benefits and credits to certified startups"}</p>
                </div>
                <div class="partner-grid">
                    { for PARTNERS.iter().map(|partner| html! {
                        <div class="partner-card">
                            <div class="partner-logo">{partner.logo}</div>
                            <h3>{partner.name}</h3>
                            <p>{partner.credits}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .partners {
                    padding: 5rem 0;
                    background: #f9fafb;
                }

                .partner-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .partner-card {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 16px;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                    text-align: center;
                    transition: transform 0.2s ease;
                }

                .partner-card:hover {
                    transform: scale(1.05);
                }

                .partner-logo {
                    font-size: 2.25rem;
                    margin-bottom: 1rem;
                }

                .partner-card h3 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }

                .partner-card p {
                    color: #1d4ed8;
                    font-weight: 500;
                }

                @media (max-width: 950px) {
                    .partner-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 600px) {
                    .partner-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

// -- Testimonials ------------------------------------------------------------

struct Testimonial {
    name: &'static str,
    company: &'static str,
    badge: BadgeLevel,
    quote: &'static str,
    funding: &'static str,
    avatar: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        company: "PayFlow Technologies",
        badge: BadgeLevel::GlobalImpact,
        quote: "FinStamp certification opened doors to Series A funding within 3 months. The credibility boost was immediate.",
        funding: "$12M Series A",
        avatar: "👩‍💼",
    },
    Testimonial {
        name: "Marcus Rodriguez",
        company: "CryptoLend",
        badge: BadgeLevel::Disruption,
        quote: "The validation process helped us refine our business model. Now we're partnered with 3 major banks.",
        funding: "$5M Seed",
        avatar: "👨‍💻",
    },
    Testimonial {
        name: "Aisha Patel",
        company: "FinanceAI",
        badge: BadgeLevel::Innovation,
        quote: "FinStamp gave us the credibility we needed to secure enterprise clients. ROI was 10x the certification cost.",
        funding: "$2M Pre-Seed",
        avatar: "👩‍🔬",
    },
];

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id={Section::Testimonials.id()} class="testimonials">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Success Stories"}</h2>
                    <p>{"See how FinStamp certification transformed these startups"}</p>
                </div>
                <div class="testimonial-grid">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <div class="testimonial-card">
                            <div class="testimonial-header">
                                <div class="testimonial-avatar">{testimonial.avatar}</div>
                                <div>
                                    <h3>{testimonial.name}</h3>
                                    <p>{testimonial.company}</p>
                                    <div class="testimonial-badge">
                                        {"★ "}{testimonial.badge.title()}{" Badge"}
                                    </div>
                                </div>
                            </div>
                            <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
                            <div class="testimonial-funding">{testimonial.funding}</div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    padding: 5rem 0;
                    background: #fff;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .testimonial-card {
                    background: #f9fafb;
                    padding: 2rem;
                    border-radius: 16px;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s ease;
                }

                .testimonial-card:hover {
                    transform: translateY(-10px);
                }

                .testimonial-header {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .testimonial-avatar {
                    font-size: 2.25rem;
                }

                .testimonial-header h3 {
                    font-weight: 600;
                    color: #111827;
                }

                .testimonial-header p {
                    color: #4b5563;
                }

                .testimonial-badge {
                    font-size: 0.875rem;
                    color: #6b7280;
                    margin-top: 0.25rem;
                }

                .testimonial-card blockquote {
                    color: #374151;
                    margin-bottom: 1rem;
                }

                .testimonial-funding {
                    color: #1d4ed8;
                    font-weight: 600;
                }

                @media (max-width: 950px) {
                    .testimonial-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

// -- CTA band ----------------------------------------------------------------

#[function_component(CtaBand)]
fn cta_band(props: &ApplyProps) -> Html {
    let onclick = {
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| on_apply.emit(()))
    };

    html! {
        <section class="cta-band">
            <div class="section-inner">
                <h2>{"Ready to Transform Your Fintech Startup?"}</h2>
                <p>{"Join hundreds of certified startups gaining investor trust and enterprise support"}</p>
                <div class="cta-band-buttons">
                    <button class="cta-white" {onclick}>{"Get Certified Today"}</button>
                    <button class="cta-ghost">{"Schedule Demo"}</button>
                </div>
            </div>

            <style>
                {r#"
                .cta-band {
                    padding: 5rem 0;
                    background: linear-gradient(90deg, #1d4ed8, #1e40af);
                    color: #fff;
                    text-align: center;
                }

                .cta-band h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .cta-band p {
                    font-size: 1.25rem;
                    opacity: 0.9;
                    max-width: 48rem;
                    margin: 0 auto 2rem;
                }

                .cta-band-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }

                .cta-white {
                    background: #fff;
                    color: #1d4ed8;
                    border: none;
                    border-radius: 9999px;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .cta-white:hover {
                    background: #f3f4f6;
                }

                .cta-ghost {
                    background: transparent;
                    color: #fff;
                    border: 2px solid #fff;
                    border-radius: 9999px;
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .cta-ghost:hover {
                    background: #fff;
                    color: #1d4ed8;
                }
                "#}
            </style>
        </section>
    }
}
