use yew::prelude::*;

use crate::config;
use crate::state::section::Section;

const STARTUP_LINKS: [&str; 5] = [
    "Certification Process",
    "Pricing",
    "Success Stories",
    "Resources",
    "Apply Now",
];

const INVESTOR_LINKS: [&str; 5] = [
    "Investor Portal",
    "Deal Flow Access",
    "Due Diligence Reports",
    "Portfolio Companies",
    "Partner Program",
];

const SOCIALS: [&str; 4] = ["twitter", "linkedin", "facebook", "instagram"];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer id={Section::Contact.id()} class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <img src={config::LOGO_PATH} alt="FinStamp Logo" />
                            <span>{"FinStamp"}</span>
                        </div>
                        <p>{"The global standard for fintech credibility and innovation validation."}</p>
                        <div class="footer-socials">
                            { for SOCIALS.iter().map(|social| html! {
                                <a href="#" class="footer-social" title={*social}>
                                    <span class="sr-only">{*social}</span>
                                </a>
                            }) }
                        </div>
                    </div>

                    <div class="footer-column">
                        <h3>{"For Startups"}</h3>
                        <ul>
                            { for STARTUP_LINKS.iter().map(|link| html! {
                                <li><a href="#">{*link}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3>{"For Investors"}</h3>
                        <ul>
                            { for INVESTOR_LINKS.iter().map(|link| html! {
                                <li><a href="#">{*link}</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h3>{"Contact Us"}</h3>
                        <ul>
                            <li>{"📧 "}{config::CONTACT_EMAIL}</li>
                            <li>{"📍 "}{config::CONTACT_LOCATION}</li>
                            <li>{"📞 "}{config::CONTACT_PHONE}</li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{"© 2024 FinStamp Global. All rights reserved."}</p>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #fff;
                    padding: 4rem 0;
                }

                .footer-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .footer-logo img {
                    height: 32px;
                    width: 32px;
                    object-fit: contain;
                }

                .footer-logo span {
                    font-size: 1.25rem;
                    font-weight: 700;
                }

                .footer-brand p {
                    color: #9ca3af;
                    margin-bottom: 1rem;
                }

                .footer-socials {
                    display: flex;
                    gap: 1rem;
                }

                .footer-social {
                    width: 40px;
                    height: 40px;
                    background: #1f2937;
                    border-radius: 50%;
                    display: inline-block;
                }

                .footer-social:hover {
                    background: #1d4ed8;
                }

                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }

                .footer-column h3 {
                    font-weight: 600;
                    margin-bottom: 1rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    color: #9ca3af;
                }

                .footer-column a {
                    color: #9ca3af;
                    text-decoration: none;
                }

                .footer-column a:hover {
                    color: #fff;
                }

                .footer-bottom {
                    border-top: 1px solid #1f2937;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    text-align: center;
                    color: #9ca3af;
                }

                @media (max-width: 768px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
