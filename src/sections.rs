use yew::prelude::*;

use crate::{
    content::{
        opens_new_tab, ContactEntry, Icon, ProjectEntry, SectionId, ABOUT, CERTIFICATES, CONTACTS, CONTACT_NOTE,
        NAV_ITEMS, OWNER, PROJECTS, TAGLINE, TECH_STACK,
    },
    frontend::{
        current_year, on_escape, scroll_to_section, use_in_view, use_mounted, Motion, ScrollReveal,
        SplitText, TrueFocus, TypewriterText, ViewReveal,
    },
    motion::{Axis, Easing, Preset, Transition, ViewOptions, VisualState},
    preview::CertificatePreview,
    split::{stagger_delay_ms, SplitMode},
};

const HEADING_MS: u32 = 800;
const TILE_STAGGER_MS: u32 = 100;
const PROJECT_STAGGER_MS: u32 = 200;

fn rise(distance: f64) -> Transition {
    Preset::Rise { distance }.transition(HEADING_MS, Easing::EaseOut)
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    icon: Option<Icon>,
    #[prop_or_default]
    class: Classes,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    let new_tab = opens_new_tab(&props.href);

    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target={new_tab.then_some("_blank")}
            rel={new_tab.then_some("noopener noreferrer")}
        >
            if let Some(icon) = props.icon {
                <span class="link-icon" aria-hidden="true">{icon.glyph()}</span>
            }
            <span>{props.label.clone()}</span>
            if new_tab {
                <span class="sr-only">{" (opens in a new tab)"}</span>
            }
        </a>
    }
}

#[function_component(Navbar)]
pub(crate) fn navbar() -> Html {
    html! {
        <nav class="navbar" aria-label="Sections">
            <div class="nav-items">
                { for NAV_ITEMS.iter().map(|item| {
                    let section = item.section;
                    let onclick = Callback::from(move |_: MouseEvent| scroll_to_section(section));
                    html! {
                        <button key={item.section.anchor()} type="button" class="nav-item" title={item.label} {onclick}>
                            <span class="nav-icon" aria-hidden="true">{item.icon.glyph()}</span>
                            <span class="nav-label">{item.label}</span>
                        </button>
                    }
                }) }
            </div>
        </nav>
    }
}

#[function_component(Hero)]
pub(crate) fn hero() -> Html {
    let mounted = use_mounted();
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section(SectionId::Contact));

    html! {
        <section id={SectionId::Home.anchor()} class="hero">
            <div class="hero-inner">
                <Motion transition={rise(50.0)} shown={mounted}>
                    <h1 class="hero-title">
                        <TypewriterText />
                        {format!(" I'm {OWNER}")}
                    </h1>
                </Motion>

                <SplitText
                    text={TAGLINE}
                    class="hero-tagline"
                    mode={SplitMode::Chars}
                    delay_ms={10}
                    duration_ms={3_000}
                    easing={Easing::Power3Out}
                    from={VisualState { opacity: 0.0, y: 40.0, ..VisualState::SETTLED }}
                    view={ViewOptions::once().with_threshold(0.1).with_root_margin("-100px")}
                />

                <Motion transition={rise(50.0).with_delay(400)} shown={mounted}>
                    <button type="button" class="button-primary" onclick={to_contact}>
                        {"Contact Me"}
                    </button>
                </Motion>
            </div>
        </section>
    }
}

#[function_component(About)]
pub(crate) fn about() -> Html {
    html! {
        <section id={SectionId::About.anchor()} class="section">
            <div class="section-inner centered">
                <ViewReveal transition={rise(100.0)} view={ViewOptions::repeatable()}>
                    <h2 class="section-title">{"About Me"}</h2>
                </ViewReveal>

                <ScrollReveal
                    text={ABOUT}
                    base_opacity={0.5}
                    enable_blur={true}
                    base_rotation={4.0}
                    blur_strength={2.0}
                    class="about-text"
                />
            </div>
        </section>
    }
}

#[function_component(TechStack)]
pub(crate) fn tech_stack() -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), ViewOptions::repeatable());
    let tile = Preset::Pop { scale: 0.8 }.transition(500, Easing::EaseOut);

    html! {
        <section id={SectionId::Tech.anchor()} class="section">
            <div ref={node} class="section-inner">
                <Motion transition={rise(100.0)} shown={shown} class="centered">
                    <TrueFocus sentence="Tech Stack" blur_amount={5.0} animation_ms={2_000} pause_ms={1_000} />
                </Motion>

                <div class="tech-grid">
                    { for TECH_STACK.iter().enumerate().map(|(index, tech)| html! {
                        <Motion
                            key={tech.name}
                            transition={tile.with_delay(stagger_delay_ms(index, TILE_STAGGER_MS))}
                            shown={shown}
                            class="tech-tile"
                        >
                            <span class={classes!("tech-monogram", tech.tone.class())} aria-hidden="true">
                                {tech.monogram}
                            </span>
                            <span class="tech-name">{tech.name}</span>
                        </Motion>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectRowProps {
    project: ProjectEntry,
    index: usize,
}

#[function_component(ProjectRow)]
fn project_row(props: &ProjectRowProps) -> Html {
    let project = props.project;
    let mirrored = props.index % 2 != 0;
    let slide = Preset::Slide {
        axis: Axis::Horizontal,
        distance: 100.0,
        reverse: mirrored,
    }
    .transition(HEADING_MS, Easing::Power3Out)
    .with_delay(stagger_delay_ms(props.index, PROJECT_STAGGER_MS));

    html! {
        <ViewReveal transition={slide} view={ViewOptions::once().with_threshold(0.1)}>
            <article class={classes!("project-row", mirrored.then_some("is-mirrored"))}>
                <div class="project-media">
                    <img src={project.image} alt={project.title} loading="lazy" />
                </div>
                <div class="project-copy">
                    <h3 class="project-title">{project.title}</h3>
                    <p class="project-description">{project.description}</p>
                    <div class="project-links">
                        <ExternalLink
                            href={project.repository_url}
                            label="View on GitHub"
                            icon={Icon::Github}
                            class="button-primary"
                        />
                        <ExternalLink
                            href={project.repository_url}
                            label="Live Demo"
                            icon={Icon::ExternalLink}
                            class="button-outline"
                        />
                    </div>
                </div>
            </article>
        </ViewReveal>
    }
}

#[function_component(Projects)]
pub(crate) fn projects() -> Html {
    html! {
        <section id={SectionId::Projects.anchor()} class="section">
            <div class="section-inner">
                <ViewReveal transition={rise(100.0)} view={ViewOptions::repeatable()} class="centered">
                    <h2 class="section-title">{"My Projects"}</h2>
                </ViewReveal>

                <div class="project-list">
                    { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                        <ProjectRow key={project.title} project={*project} index={index} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Certificates)]
pub(crate) fn certificates() -> Html {
    let preview = use_state_eq(CertificatePreview::default);

    {
        let setter = preview.setter();
        use_effect_with(*preview, move |current| {
            let current = *current;
            let listener = current
                .is_open()
                .then(|| on_escape(move || setter.set(current.close())))
                .flatten();
            move || drop(listener)
        });
    }

    let on_close = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| preview.set((*preview).close()))
    };
    let keep_open = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <>
            <section id={SectionId::Certificates.anchor()} class="section">
                <div class="section-inner">
                    <ViewReveal transition={rise(100.0)} class="centered">
                        <h2 class="section-title">{"Certificates"}</h2>
                    </ViewReveal>

                    <div class="certificate-grid">
                        { for CERTIFICATES.iter().map(|certificate| {
                            let onclick = {
                                let preview = preview.clone();
                                let image = certificate.image;
                                Callback::from(move |_: MouseEvent| preview.set((*preview).open(image)))
                            };
                            html! {
                                <button key={certificate.name} type="button" class="certificate-card" {onclick}>
                                    <span class="certificate-icon tone-yellow" aria-hidden="true">
                                        {Icon::Certificate.glyph()}
                                    </span>
                                    <span class="certificate-copy">
                                        <span class="certificate-name">{certificate.name}</span>
                                        <span class="certificate-description">{certificate.description}</span>
                                    </span>
                                    <span class="certificate-hint">{"Click to view certificate"}</span>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </section>

            if let Some(image) = preview.image() {
                <div
                    class="modal-backdrop"
                    role="dialog"
                    aria-modal="true"
                    aria-label="Certificate preview"
                    onclick={on_close.clone()}
                >
                    <div class="modal" onclick={keep_open}>
                        <button type="button" class="modal-close" aria-label="Close preview" onclick={on_close}>
                            {"×"}
                        </button>
                        <img class="modal-image" src={image} alt="Certificate Preview" />
                    </div>
                </div>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ContactCardProps {
    contact: ContactEntry,
}

#[function_component(ContactCard)]
fn contact_card(props: &ContactCardProps) -> Html {
    let contact = props.contact;
    let new_tab = opens_new_tab(contact.link);

    html! {
        <a
            class="contact-card"
            href={contact.link}
            target={new_tab.then_some("_blank")}
            rel={new_tab.then_some("noopener noreferrer")}
        >
            <span class={classes!("contact-icon", contact.tone.class())} aria-hidden="true">
                {contact.icon.glyph()}
            </span>
            <span class="contact-platform">{contact.platform}</span>
            <span class="contact-value">{contact.value}</span>
        </a>
    }
}

#[function_component(Contact)]
pub(crate) fn contact() -> Html {
    let node = use_node_ref();
    let shown = use_in_view(node.clone(), ViewOptions::repeatable());
    let cards = Preset::Slide {
        axis: Axis::Vertical,
        distance: 100.0,
        reverse: false,
    }
    .transition(HEADING_MS, Easing::Power3Out);

    html! {
        <section id={SectionId::Contact.anchor()} class="section">
            <div ref={node} class="section-inner narrow">
                <Motion transition={rise(100.0)} shown={shown} class="centered">
                    <h2 class="section-title">{"Contact"}</h2>
                </Motion>

                <ViewReveal transition={cards} view={ViewOptions::once().with_threshold(0.1)}>
                    <div class="contact-grid">
                        { for CONTACTS.iter().map(|contact| html! {
                            <ContactCard key={contact.platform} contact={*contact} />
                        }) }
                    </div>
                </ViewReveal>

                <Motion transition={rise(50.0).with_delay(400)} shown={shown} class="contact-note">
                    <p>{CONTACT_NOTE}</p>
                </Motion>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <span>{format!("© {} {OWNER}. All rights reserved.", current_year())}</span>
                <span>
                    {"Built with "}
                    <ExternalLink href="https://yew.rs/" label="Yew" class="footer-link" />
                </span>
            </div>
        </footer>
    }
}

