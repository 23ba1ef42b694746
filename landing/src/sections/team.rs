use leptos::prelude::*;

use crate::content::{SectionId, TEAM, TeamMember};

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section id=SectionId::Team.anchor() class="ack-section">
            <h2>"The Team"</h2>
            <div class="ack-grid">
                {TEAM
                    .iter()
                    .map(|member| view! { <TeamCard member=*member /> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn TeamCard(member: TeamMember) -> impl IntoView {
    view! {
        <div class="ack-card hover-grow">
            <img src=member.image_path alt=member.name class="ack-img" />
            <h4>{member.name}</h4>
            <p>{member.title}</p>
        </div>
    }
}
