pub mod escape;
pub mod script;

use crate::page::PageConfig;

use escape::{escape_css_string, escape_html};
use script::interaction_script;

pub const DEFAULT_BACKGROUND: &str = "linear-gradient(135deg, #ff9a9e 0%, #fad0c4 100%)";
pub const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;500;600;700&amp;display=swap";

/// `background-image` value shared by the main and success scenes.
pub fn scene_background(page: &PageConfig) -> String {
    match page.background() {
        Some(url) => format!("url(\"{}\")", escape_css_string(url)),
        None => DEFAULT_BACKGROUND.to_string(),
    }
}

/// Render `page` into a standalone HTML document.
///
/// Output depends only on `page`; randomness is left to the embedded script.
pub fn render_html(page: &PageConfig) -> String {
    let title = escape_html(&page.title);
    let subtitle = escape_html(&page.subtitle);
    let first_image = escape_html(&page.first_image);
    let second_image = escape_html(&page.second_image);
    let yes_click_text = escape_html(&page.yes_click_text);
    let yes_button_text = escape_html(&page.yes_button_text);
    let no_button_text = escape_html(&page.no_button_text);
    let background = scene_background(page);
    let script = interaction_script(&page.no_button_phrases, page.button_animation);

    format!(
        r####"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8"/>
  <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
  <title>{title}</title>
  <link href="{FONT_STYLESHEET}" rel="stylesheet"/>
  <style>
    * {{
      margin: 0;
      padding: 0;
      box-sizing: border-box;
      font-family: 'Poppins', sans-serif;
    }}

    body {{
      min-height: 100vh;
      display: flex;
      justify-content: center;
      align-items: center;
      background-color: transparent;
      background-image: {background};
      background-size: cover;
      background-position: center;
      background-repeat: no-repeat;
      text-align: center;
      overflow: hidden;
    }}

    .container {{
      background: rgba(255, 255, 255, 0.95);
      padding: 2.5rem;
      border-radius: 24px;
      box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
      max-width: 90%;
      width: 500px;
      position: relative;
      transition: all 0.5s cubic-bezier(0.4, 0, 0.2, 1);
      backdrop-filter: blur(10px);
      border: 1px solid rgba(255, 255, 255, 0.2);
    }}

    .container h1 {{
      color: #1a1a1a;
      font-size: 2rem;
      margin-bottom: 1rem;
      font-weight: 600;
      line-height: 1.2;
    }}

    .container p {{
      color: #4a4a4a;
      font-size: 1.1rem;
      margin-bottom: 1.5rem;
      line-height: 1.6;
    }}

    .image, .success-image {{
      width: 300px;
      height: 300px;
      max-width: 100%;
      object-fit: cover;
      border-radius: 20px;
    }}

    .image {{
      margin: 1.5rem 0;
      box-shadow: 0 8px 20px rgba(0, 0, 0, 0.1);
      transition: transform 0.3s ease;
    }}

    .image:hover {{
      transform: scale(1.02);
    }}

    .buttons {{
      display: flex;
      gap: 1rem;
      justify-content: center;
      align-items: center;
      flex-wrap: wrap;
      margin-top: 1.5rem;
      position: relative;
      min-height: 60px;
      padding: 1rem;
    }}

    .yes-btn, .no-btn {{
      padding: 0.8rem 2.5rem;
      font-size: 1.1rem;
      font-weight: 500;
      border: none;
      border-radius: 12px;
      cursor: pointer;
      transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
      position: relative;
      width: 100%;
      max-width: 200px;
    }}

    .yes-btn {{
      background: linear-gradient(45deg, #ff6b6b, #ff8e8e);
      color: white;
      z-index: 100;
      box-shadow: 0 4px 15px rgba(255, 107, 107, 0.3);
    }}

    .yes-btn:hover {{
      box-shadow: 0 6px 20px rgba(255, 107, 107, 0.4);
    }}

    .yes-btn.growing {{
      position: fixed;
      top: 50%;
      left: 50%;
      transform: translate(-50%, -50%) scale(1);
      transition: transform 0.5s cubic-bezier(0.4, 0, 0.2, 1);
      z-index: 99;
    }}

    .no-btn {{
      background: #f0f0f0;
      color: #666;
      box-shadow: 0 4px 15px rgba(0, 0, 0, 0.1);
    }}

    .no-btn:hover {{
      background: #e8e8e8;
    }}

    .no-btn.moving {{
      position: absolute;
    }}

    .hidden {{
      display: none !important;
    }}

    .success-container {{
      position: fixed;
      top: 0;
      left: 0;
      width: 100vw;
      height: 100vh;
      display: none;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      background-color: transparent;
      background-image: {background};
      background-size: cover;
      background-position: center;
      z-index: 1000;
      opacity: 0;
      transition: all 1s cubic-bezier(0.4, 0, 0.2, 1);
      padding: 1rem;
    }}

    .success-container.visible {{
      display: flex;
      opacity: 1;
    }}

    .success-image {{
      margin: 2rem 0;
      box-shadow: 0 8px 25px rgba(0, 0, 0, 0.15);
      animation: float 3s ease-in-out infinite;
    }}

    .success-text {{
      font-size: 2rem;
      color: #1a1a1a;
      font-weight: 600;
      margin: 2rem;
      padding: 1.5rem 2.5rem;
      background: rgba(255, 255, 255, 0.95);
      border-radius: 16px;
      backdrop-filter: blur(10px);
      box-shadow: 0 8px 25px rgba(0, 0, 0, 0.1);
      border: 1px solid rgba(255, 255, 255, 0.2);
      animation: fade-in-up 1s ease-out;
    }}

    @keyframes float {{
      0% {{ transform: translateY(0); }}
      50% {{ transform: translateY(-10px); }}
      100% {{ transform: translateY(0); }}
    }}

    @keyframes fade-in-up {{
      from {{ opacity: 0; transform: translateY(20px); }}
      to {{ opacity: 1; transform: translateY(0); }}
    }}

    @media (max-width: 768px) {{
      .container {{ padding: 1.5rem; }}
      .container h1 {{ font-size: 1.5rem; }}
      .container p {{ font-size: 1rem; }}
      .success-text {{ font-size: 1.5rem; padding: 1rem 1.5rem; margin: 1rem; }}
      .image, .success-image {{ width: 250px; height: 250px; }}
    }}

    @media (max-width: 480px) {{
      .container {{ padding: 1rem; }}
      .buttons {{ gap: 0.5rem; }}
      .yes-btn, .no-btn {{ padding: 0.6rem 1.5rem; font-size: 1rem; }}
      .image, .success-image {{ width: 200px; height: 200px; }}
    }}
  </style>
</head>
<body>
  <div class="container" id="mainContainer">
    <h1 id="title">{title}</h1>
    <p id="subtitle">{subtitle}</p>
    <img src="{first_image}" alt="Valentine" class="image" id="valentineImage"/>
    <div class="buttons" id="buttonContainer">
      <button class="yes-btn" id="yesBtn" type="button">{yes_button_text}</button>
      <button class="no-btn" id="noBtn" type="button">{no_button_text}</button>
    </div>
  </div>

  <div class="success-container" id="successContainer">
    <img src="{second_image}" alt="Success" class="success-image"/>
    <p class="success-text">{yes_click_text}</p>
  </div>

  <script>{script}</script>
</body>
</html>
"####
    )
}
