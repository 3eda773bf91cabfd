use yew::prelude::*;

pub const NOTICE_TEXT: &str = "24시간 이내에 이미 방문하셨습니다.";

#[derive(Properties, PartialEq)]
pub struct TrafficCounterProps {
    pub visits: AttrValue,
    pub downloads: AttrValue,
}

#[function_component(TrafficCounter)]
pub fn traffic_counter(props: &TrafficCounterProps) -> Html {
    html! {
        <div class="traffic">
            <div>
                {"방문자 수"}
                <strong>{ props.visits.clone() }</strong>
            </div>
            <div>
                {"다운로드 수"}
                <strong>{ props.downloads.clone() }</strong>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VisitNoticeProps {
    pub visible: bool,
}

#[function_component(VisitNotice)]
pub fn visit_notice(props: &VisitNoticeProps) -> Html {
    html! {
        if props.visible {
            <div class="notice" role="status">{ NOTICE_TEXT }</div>
        }
    }
}
