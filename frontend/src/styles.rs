use stylist::Style;

/// Keyframes live in a plain `<style>` block; the scoped sheet below refers
/// to them by name.
pub const KEYFRAMES: &str = r#"
    @keyframes ala-bounce {
        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
    }
    @keyframes ala-bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    @keyframes ala-fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
"#;

const PAGE_CSS: &str = r#"
    display: flex;
    flex-direction: column;
    align-items: center;
    width: 100%;
    min-height: 100vh;
    overflow-x: hidden;
    background: #fff;
    color: #000;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    user-select: none;

    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
    }
    .reveal.in-view {
        opacity: 1;
        transform: none;
    }
    .hover-pop {
        cursor: pointer;
    }
    .reveal.in-view.hover-pop:hover, .hover-pop:hover {
        transform: scale(1.05) rotate(4deg);
        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
    }

    .top-bar {
        display: flex;
        justify-content: space-between;
        width: 100%;
        padding: 16px 24px;
        font-size: 14px;
        font-weight: 600;
        box-sizing: border-box;
    }
    .logo {
        display: flex;
        align-items: center;
    }
    .logo img {
        width: 35px;
    }
    .logo span {
        margin: 4px 0 0 4px;
    }

    .hero {
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        width: 100%;
        padding: 80px 16px;
        box-sizing: border-box;
    }
    .hero-copy {
        margin-left: 80px;
    }
    .hero-copy h1 {
        font-size: 48px;
        font-weight: 700;
    }
    .hero-copy p {
        margin-top: 20px;
        font-size: 24px;
        color: #6b7280;
    }
    .hero-image {
        display: flex;
        justify-content: flex-end;
        width: 100%;
        margin-top: 40px;
    }
    .hero-image img {
        width: 500px;
        margin-right: 60px;
        animation: ala-bounce 1s infinite;
    }

    .scroll-indicator {
        position: relative;
        top: -80px;
        padding: 16px 0;
        opacity: 0;
        transition: opacity 1s 0.5s;
    }
    .scroll-indicator.in-view {
        opacity: 1;
    }
    .scroll-indicator.in-view img {
        animation: ala-bob 1.5s infinite;
        cursor: grab;
    }

    .panel {
        width: 100%;
        max-width: 1024px;
        padding: 64px 16px;
        text-align: center;
        box-sizing: border-box;
    }
    .panel h2 {
        margin-bottom: 80px;
        font-size: 30px;
        font-weight: 600;
    }
    .cards {
        display: grid;
        grid-template-columns: 1fr;
        gap: 32px;
    }
    @media (min-width: 768px) {
        .cards {
            grid-template-columns: repeat(3, 1fr);
        }
    }
    .card {
        padding: 40px;
        background: #000;
        color: #fff;
        border-radius: 12px;
    }
    .card .emoji {
        margin-bottom: 8px;
        font-size: 36px;
    }
    .card p {
        margin-bottom: 40px;
    }
    .card audio {
        width: 100%;
    }

    .ellipsis {
        margin: 160px 0;
        font-size: 36px;
        line-height: 1;
        text-align: center;
    }

    .tagline {
        margin-bottom: 200px;
        font-size: 48px;
        font-weight: 600;
    }

    .traffic {
        display: flex;
        gap: 48px;
        margin-bottom: 24px;
        font-size: 18px;
    }
    .traffic strong {
        display: block;
        font-size: 32px;
    }

    .notice {
        position: fixed;
        top: 24px;
        left: 50%;
        transform: translateX(-50%);
        padding: 12px 24px;
        background: rgba(0, 0, 0, 0.85);
        color: #fff;
        border-radius: 9999px;
        animation: ala-fade-in 0.3s ease-out;
        z-index: 10;
    }

    .cta {
        display: flex;
        justify-content: center;
        width: 100%;
        padding: 40px 0;
        margin-bottom: 200px;
        opacity: 0;
        transform: scale(0.9);
        transition: opacity 0.4s, transform 0.4s;
    }
    .cta.in-view {
        opacity: 1;
        transform: scale(1);
    }
    .cta.in-view:hover {
        transform: scale(1.1);
    }
    .cta button {
        padding: 40px 320px;
        font-size: 20px;
        font-weight: 500;
        background: transparent;
        border: 2px solid #000;
        border-radius: 16px;
        cursor: pointer;
    }
    @media (max-width: 950px) {
        .cta button {
            padding: 32px 48px;
        }
        .hero-copy {
            margin-left: 0;
        }
        .hero-image img {
            width: 100%;
            margin-right: 0;
        }
    }
"#;

/// Registers the scoped page sheet and returns its class name. An empty class
/// leaves the page unstyled but still usable.
pub fn page_class() -> String {
    match Style::new(PAGE_CSS) {
        Ok(style) => style.get_class_name().to_string(),
        Err(e) => {
            log::error!("Failed to build page style: {}", e);
            String::new()
        }
    }
}
