use yew::prelude::*;

use crate::motion::{reveal, stagger_style, use_in_view, PANEL_AMOUNT};

#[derive(Clone, Copy, PartialEq)]
pub struct SoundSample {
    pub label: &'static str,
    pub src: &'static str,
}

/// Stock iPhone sounds.
pub const BEFORE_SAMPLES: &[SoundSample] = &[
    SoundSample { label: "한결같은 벨소리", src: "/sounds/iphonebell" },
    SoundSample { label: "지루한 알림음", src: "/sounds/iphonenoti" },
    SoundSample { label: "아이폰만의 구시대적인 단점", src: "/sounds/failed.mp3" },
];

/// The same moments with ALA.
pub const AFTER_SAMPLES: &[SoundSample] = &[
    SoundSample { label: "늘 짜릿한 벨소리", src: "/sounds/gongsup.mp3" },
    SoundSample { label: "아이유의 모닝콜", src: "/sounds/iubell.mp3" },
    SoundSample { label: "아이폰을 재정의해주는 신규 기능", src: "/sounds/sucess.mp3" },
];

#[derive(Properties, PartialEq)]
pub struct ComparisonPanelProps {
    pub title: AttrValue,
    pub emoji: AttrValue,
    pub samples: &'static [SoundSample],
}

#[function_component(ComparisonPanel)]
pub fn comparison_panel(props: &ComparisonPanelProps) -> Html {
    let section_ref = use_node_ref();
    let in_view = use_in_view(section_ref.clone(), PANEL_AMOUNT);

    html! {
        <section ref={section_ref} class="panel">
            <h2 class={classes!(reveal(in_view), "hover-pop")}>{ props.title.clone() }</h2>
            <div class="cards">
                { for props.samples.iter().enumerate().map(|(idx, sample)| html! {
                    <div
                        key={sample.src}
                        class={classes!("card", reveal(in_view), "hover-pop")}
                        style={stagger_style(idx + 1)}
                    >
                        <div class="emoji">{ props.emoji.clone() }</div>
                        <p>{ sample.label }</p>
                        <audio controls={true}>
                            <source src={sample.src} type="audio/mp3" />
                        </audio>
                    </div>
                }) }
            </div>
        </section>
    }
}
