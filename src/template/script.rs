use crate::interaction::{
    FONT_SCALE_PER_UNIT, GROWTH_FACTOR, GROWTH_THRESHOLD, GROW_STEP, HIDE_DELAY_MS,
    MAX_GROWTH_FRAMES, RANDOM_SPREAD,
};
use crate::page::ButtonAnimation;

use super::escape::js_string_array;

/// Body of the `<script>` element that drives the page. Mirrors
/// [`crate::interaction::Session`].
pub fn interaction_script(phrases: &[String], animation: ButtonAnimation) -> String {
    let phrases = js_string_array(phrases);
    let animation = animation.as_str();

    format!(
        r####"
    (function() {{
      const phrases = {phrases};
      const animation = "{animation}";

      const GROWTH_FACTOR = {GROWTH_FACTOR};
      const GROWTH_THRESHOLD = {GROWTH_THRESHOLD};
      const MAX_GROWTH_FRAMES = {MAX_GROWTH_FRAMES};
      const GROW_STEP = {GROW_STEP};
      const FONT_SCALE_PER_UNIT = {FONT_SCALE_PER_UNIT};
      const RANDOM_SPREAD = {RANDOM_SPREAD};
      const HIDE_DELAY_MS = {HIDE_DELAY_MS};

      let phraseIndex = -1;
      let yesScale = 1;
      let isTransitioning = false;
      let isFirstClick = true;

      const mainContainer = document.getElementById('mainContainer');
      const successContainer = document.getElementById('successContainer');
      const buttonContainer = document.getElementById('buttonContainer');
      const yesBtn = document.getElementById('yesBtn');
      const noBtn = document.getElementById('noBtn');

      function randomOffset() {{
        const rect = buttonContainer.getBoundingClientRect();
        const angle = Math.random() * Math.PI * 2;
        const distanceX = Math.random() * rect.width * RANDOM_SPREAD;
        const distanceY = Math.random() * rect.height * RANDOM_SPREAD;
        return {{ x: Math.cos(angle) * distanceX, y: Math.sin(angle) * distanceY }};
      }}

      yesBtn.addEventListener('click', function() {{
        if (isTransitioning) return;
        isTransitioning = true;

        yesBtn.classList.add('growing');
        let frames = 0;

        function grow() {{
          yesScale *= GROWTH_FACTOR;
          frames += 1;
          yesBtn.style.transform = `translate(-50%, -50%) scale(${{yesScale}})`;

          if (yesScale < GROWTH_THRESHOLD && frames < MAX_GROWTH_FRAMES) {{
            requestAnimationFrame(grow);
            return;
          }}

          successContainer.classList.add('visible');
          mainContainer.style.opacity = 0;
          setTimeout(function() {{
            mainContainer.classList.add('hidden');
            yesBtn.classList.add('hidden');
          }}, HIDE_DELAY_MS);
        }}

        grow();
      }});

      noBtn.addEventListener('click', function() {{
        if (isTransitioning) return;

        if (phrases.length > 0) {{
          phraseIndex = (phraseIndex + 1) % phrases.length;
          noBtn.textContent = phrases[phraseIndex];
        }}

        if (animation === 'random') {{
          if (isFirstClick) {{
            noBtn.classList.add('moving');
            noBtn.style.left = '50%';
            noBtn.style.top = '50%';
            isFirstClick = false;
          }}
          const offset = randomOffset();
          noBtn.style.transform = `translate(calc(-50% + ${{offset.x}}px), calc(-50% + ${{offset.y}}px))`;
        }} else {{
          yesScale += GROW_STEP;
          yesBtn.style.transform = `scale(${{yesScale}})`;
          yesBtn.style.fontSize = `${{1 + yesScale * FONT_SCALE_PER_UNIT}}rem`;
        }}
      }});
    }})();
  "####
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_interpolated() {
        let script = interaction_script(&[], ButtonAnimation::Grow);
        assert!(script.contains("const GROWTH_FACTOR = 1.5;"));
        assert!(script.contains("const GROWTH_THRESHOLD = 100;"));
        assert!(script.contains("const MAX_GROWTH_FRAMES = 64;"));
        assert!(script.contains("const GROW_STEP = 0.3;"));
        assert!(script.contains("const RANDOM_SPREAD = 0.4;"));
        assert!(script.contains("const HIDE_DELAY_MS = 500;"));
    }

    #[test]
    fn animation_mode_comes_from_enum() {
        assert!(interaction_script(&[], ButtonAnimation::Random)
            .contains(r#"const animation = "random";"#));
        assert!(interaction_script(&[], ButtonAnimation::Grow)
            .contains(r#"const animation = "grow";"#));
    }

    #[test]
    fn empty_phrase_list_is_guarded() {
        let script = interaction_script(&[], ButtonAnimation::Grow);
        assert!(script.contains("const phrases = [];"));
        assert!(script.contains("if (phrases.length > 0)"));
    }

    #[test]
    fn first_refusal_shows_first_phrase() {
        let script = interaction_script(&["A".to_string()], ButtonAnimation::Grow);
        assert!(script.contains("let phraseIndex = -1;"));
        assert!(script.contains("phraseIndex = (phraseIndex + 1) % phrases.length;"));
    }

    #[test]
    fn both_handlers_ignore_clicks_while_transitioning() {
        let script = interaction_script(&[], ButtonAnimation::Grow);
        assert_eq!(script.matches("if (isTransitioning) return;").count(), 2);

        let yes = script.find("yesBtn.addEventListener('click'").unwrap();
        let no = script.find("noBtn.addEventListener('click'").unwrap();
        let yes_guard = yes + script[yes..].find("if (isTransitioning) return;").unwrap();
        let no_guard = no + script[no..].find("if (isTransitioning) return;").unwrap();
        assert!(yes_guard < no, "affirmative handler lacks its guard");
        assert!(no_guard > no);
        assert!(script[yes_guard..].find("isTransitioning = true;").is_some());
    }

    #[test]
    fn random_mode_anchors_before_first_offset() {
        let script = interaction_script(&[], ButtonAnimation::Random);
        let branch = script.find("if (animation === 'random')").unwrap();
        let moving = branch + script[branch..].find("classList.add('moving')").unwrap();
        let left = branch + script[branch..].find("noBtn.style.left = '50%';").unwrap();
        let top = branch + script[branch..].find("noBtn.style.top = '50%';").unwrap();
        let offset = branch + script[branch..].find("randomOffset()").unwrap();
        assert!(moving < offset);
        assert!(left < offset);
        assert!(top < offset);
        assert!(script[branch..moving].contains("if (isFirstClick)"));
    }

    #[test]
    fn growth_stops_at_threshold_or_frame_cap() {
        let script = interaction_script(&[], ButtonAnimation::Grow);
        assert!(script.contains("yesScale < GROWTH_THRESHOLD && frames < MAX_GROWTH_FRAMES"));
        assert_eq!(script.matches("setTimeout(").count(), 1);
    }

    #[test]
    fn js_template_placeholders_survive_formatting() {
        let script = interaction_script(&[], ButtonAnimation::Random);
        assert!(script.contains("scale(${yesScale})"));
        assert!(script.contains("calc(-50% + ${offset.x}px)"));
    }
}
