use yew::prelude::*;
use shared::content::{Project, PROJECTS};
use super::theme_class;

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub dark_mode: bool,
}

fn project_link(url: Option<&'static str>, label: &'static str) -> Html {
    match url {
        Some(href) => html! {
            <a class="project-link" href={href} target="_blank" rel="noopener noreferrer">{label}</a>
        },
        None => html! {
            <span class="project-link disabled">{label}</span>
        },
    }
}

fn project_card(project: &Project) -> Html {
    html! {
        <article key={project.title} class="card project-card">
            <img class="project-image" src={project.image} alt={project.title} />
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="tech-tags">
                    {for project.tech.iter().map(|tech| html! { <span class="tech-tag">{*tech}</span> })}
                </div>
                <div class="project-links">
                    {project_link(project.live_url, "Live Demo")}
                    {project_link(project.source_url, "Code")}
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects(props: &ProjectsProps) -> Html {
    html! {
        <section id="projects" class={classes!("section", "projects", theme_class(props.dark_mode))}>
            <div class="container">
                <h2 class="section-title">{"Featured Projects"}</h2>
                <div class="projects-grid">
                    {for PROJECTS.iter().map(project_card)}
                </div>
            </div>
        </section>
    }
}
