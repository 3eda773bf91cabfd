use yew::prelude::*;

use crate::components::comparison::{ComparisonPanel, AFTER_SAMPLES, BEFORE_SAMPLES};
use crate::components::traffic::{TrafficCounter, VisitNotice};
use crate::counter::client::CounterClient;
use crate::counter::session::{start_download, start_visit};
use crate::counter::stats::CounterState;
use crate::motion::{reveal, stagger_style, use_in_view, Amount, HERO_AMOUNT};
use crate::styles::{page_class, KEYFRAMES};

#[function_component(Home)]
pub fn home() -> Html {
    let counter = use_reducer(CounterState::default);
    let client = use_memo(|_| CounterClient::default(), ());
    let page_style = use_memo(|_| page_class(), ());

    let hero_ref = use_node_ref();
    let scroll_ref = use_node_ref();
    let cta_ref = use_node_ref();
    let hero_in_view = use_in_view(hero_ref.clone(), HERO_AMOUNT);
    let scroll_in_view = use_in_view(scroll_ref.clone(), Amount::Some);
    let cta_in_view = use_in_view(cta_ref.clone(), Amount::Some);

    // Count the visit once per mount
    {
        let dispatcher = counter.dispatcher();
        let client = client.clone();
        use_effect_with_deps(
            move |_| {
                start_visit((*client).clone(), dispatcher);
                || ()
            },
            (),
        );
    }

    let on_download = {
        let dispatcher = counter.dispatcher();
        let client = client.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            start_download((*client).clone(), dispatcher.clone());
        })
    };

    html! {
        <main class={(*page_style).clone()}>
            <style>{ KEYFRAMES }</style>
            <VisitNotice visible={counter.notice_visible} />

            <div class="top-bar">
                <div class="logo reveal in-view hover-pop">
                    <img src="/assets/icon.svg" alt="로고" />
                    <span>{"ALA"}</span>
                </div>
            </div>

            <section ref={hero_ref} class="hero">
                <div class={classes!("hero-copy", reveal(hero_in_view), "hover-pop")}>
                    <h1>{"아이폰 유저는 알람소리를 커스텀 할 수 없다?"}</h1>
                    <p>
                        {"갤럭시는 마음대로 알람 커스텀 가능한데...?"}<br />
                        {"이참에 갤럭시로 갈아탈까???"}
                    </p>
                </div>
                <div class={classes!("hero-image", reveal(hero_in_view))} style={stagger_style(1)}>
                    <img src="/assets/android_better_iphone.svg" alt="메인 이미지" />
                </div>
            </section>

            <div ref={scroll_ref} class={classes!("scroll-indicator", scroll_in_view.then_some("in-view"))}>
                <img src="/assets/scroll.svg" alt="scroll" />
            </div>

            <ComparisonPanel
                title="아이폰 효과음을 커스텀 할 수는 없을까?? 😥"
                emoji="👻"
                samples={BEFORE_SAMPLES}
            />

            <div class="ellipsis">
                {"."}<br />{"."}<br />{"."}
            </div>

            <ComparisonPanel
                title="ALA가 있다면 !? 🤔"
                emoji="✅"
                samples={AFTER_SAMPLES}
            />

            <h2 class="tagline">{"아이폰 효과음을 커스텀 하다."}</h2>

            <TrafficCounter visits={counter.visit_label()} downloads={counter.download_label()} />

            <div ref={cta_ref} class={classes!("cta", cta_in_view.then_some("in-view"))}>
                <button onclick={on_download}>{"DownLoad ALA From Now ON"}</button>
            </div>
        </main>
    }
}
