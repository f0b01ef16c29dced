use yew::prelude::*;
use shared::content::SKILL_CATEGORIES;
use super::theme_class;

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub dark_mode: bool,
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    html! {
        <section id="skills" class={classes!("section", "skills", theme_class(props.dark_mode))}>
            <div class="container">
                <h2 class="section-title">{"Skills & Technologies"}</h2>
                <p class="section-subtitle">
                    {"Here are the technologies and tools I work with to bring ideas to life."}
                </p>

                <div class="skills-grid">
                    {for SKILL_CATEGORIES.iter().map(|category| html! {
                        <div key={category.title} class="card skill-category">
                            <h3>{category.title}</h3>
                            {for category.skills.iter().map(|skill| html! {
                                <div key={skill.name} class="skill">
                                    <div class="skill-header">
                                        <span class="skill-name">{skill.name}</span>
                                        <span class="skill-level">{format!("{}%", skill.level)}</span>
                                    </div>
                                    <div class="skill-track">
                                        <div class="skill-bar" style={format!("width: {}%", skill.level)}></div>
                                    </div>
                                </div>
                            })}
                        </div>
                    })}
                </div>
            </div>
        </section>
    }
}
