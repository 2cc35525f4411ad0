use crate::models::RollingStats;
use crate::mood::MoodLevel;
use crate::stats::sleep_band;

pub fn render_index(today: &str, stats: &RollingStats) -> String {
    INDEX_HTML
        .replace("{{TONE_STYLES}}", &tone_styles())
        .replace("{{TODAY}}", today)
        .replace("{{AVG_MOOD}}", &stats.average_mood_label)
        .replace("{{AVG_SLEEP}}", &sleep_band(&stats.average_sleep_hours))
        .replace("{{MOOD_OPTIONS}}", &mood_options())
}

fn tone_styles() -> String {
    MoodLevel::ALL
        .iter()
        .map(|mood| {
            let profile = mood.profile();
            format!(
                "    .tone-{} {{ color: {}; --tone: {}; }}\n",
                profile.icon_color, profile.bar_color, profile.bar_color
            )
        })
        .collect()
}

fn mood_options() -> String {
    MoodLevel::ALL
        .iter()
        .map(|mood| {
            format!(
                r#"        <label class="mood-option tone-{color}">
          <input type="radio" name="mood" value="{key}" required />
          <span class="mood-icon">{icon}</span>
          <span class="mood-label">{label}</span>
          <span class="radio"></span>
        </label>
"#,
                color = mood.profile().icon_color,
                key = mood.key(),
                icon = mood.icon(),
                label = mood.label(),
            )
        })
        .collect()
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Mood tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;500;600;700&display=swap');

    :root {
      --bg: #f6f9fc;
      --ink: #1e293b;
      --muted: #94a3b8;
      --soft: #64748b;
      --card: #ffffff;
      --night: #1e293b;
      --night-2: #334155;
      --shadow: 0 24px 60px rgba(30, 41, 59, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Plus Jakarta Sans", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

{{TONE_STYLES}}
    .app {
      width: min(1200px, 100%);
      margin: 0 auto;
      display: grid;
      grid-template-columns: minmax(260px, 1fr) 2fr;
      gap: 32px;
    }

    header.top {
      width: min(1200px, 100%);
      margin: 0 auto 40px;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    header.top h1 {
      margin: 0;
      font-size: 1.25rem;
      font-weight: 700;
    }

    .welcome h2 {
      margin: 0 0 8px;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    .welcome p {
      margin: 0 0 8px;
      color: var(--soft);
      font-size: 1.2rem;
    }

    .welcome .today {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
      margin-bottom: 28px;
    }

    .kpis {
      display: grid;
      gap: 24px;
      margin-top: 32px;
    }

    .kpi {
      border-radius: 32px;
      padding: 32px;
      display: grid;
      gap: 6px;
    }

    .kpi.mood {
      background: #eff6ff;
    }

    .kpi.sleep {
      background: var(--night);
      color: white;
    }

    .kpi .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--soft);
    }

    .kpi.sleep .label,
    .kpi .hint {
      color: var(--muted);
    }

    .kpi .value {
      font-size: 1.9rem;
      font-weight: 700;
    }

    .kpi .hint {
      font-size: 0.9rem;
      margin: 0;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 16px 28px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, opacity 150ms ease;
      font-family: inherit;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.4;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--night);
      color: white;
      box-shadow: 0 16px 32px rgba(30, 41, 59, 0.18);
    }

    .btn-ghost {
      background: transparent;
      color: var(--muted);
    }

    .chart-card {
      background: var(--card);
      border-radius: 40px;
      padding: 32px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 24px;
      align-content: start;
      position: relative;
    }

    .chart-card h3 {
      margin: 0;
      font-size: 1.5rem;
    }

    #chart {
      width: 100%;
      height: 400px;
      display: block;
    }

    #chart text {
      font-family: inherit;
    }

    .chart-grid {
      stroke: #f1f5f9;
      stroke-dasharray: 3 3;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 12px;
      font-weight: 500;
    }

    .chart-icon {
      font-size: 20px;
    }

    .chart-bar:hover {
      opacity: 0.85;
    }

    .tooltip {
      position: absolute;
      pointer-events: none;
      background: var(--night);
      color: white;
      padding: 10px 14px;
      border-radius: 12px;
      font-size: 0.85rem;
      display: none;
      box-shadow: var(--shadow);
    }

    .tooltip strong {
      display: block;
      margin-bottom: 4px;
    }

    dialog {
      border: none;
      border-radius: 40px;
      padding: 32px;
      width: min(440px, 92vw);
      box-shadow: 0 32px 80px rgba(15, 23, 42, 0.3);
    }

    dialog::backdrop {
      background: rgba(15, 23, 42, 0.4);
      backdrop-filter: blur(4px);
    }

    dialog header {
      text-align: center;
      margin-bottom: 24px;
    }

    dialog h2 {
      margin: 0 0 6px;
    }

    dialog p {
      margin: 0;
      color: var(--soft);
    }

    .mood-list {
      display: grid;
      gap: 12px;
      margin-bottom: 24px;
    }

    .mood-option {
      display: flex;
      align-items: center;
      gap: 16px;
      padding: 14px 16px;
      border-radius: 18px;
      border: 2px solid transparent;
      cursor: pointer;
    }

    .mood-option:hover {
      background: #f8fafc;
    }

    .mood-option input {
      position: absolute;
      opacity: 0;
    }

    .mood-option:has(input:checked) {
      border-color: var(--tone);
    }

    .mood-icon {
      font-size: 1.6rem;
    }

    .mood-label {
      flex: 1;
      font-weight: 600;
      color: var(--ink);
    }

    .radio {
      width: 22px;
      height: 22px;
      border-radius: 50%;
      border: 2px solid #e2e8f0;
    }

    .mood-option:has(input:checked) .radio {
      border-color: var(--ink);
      background: radial-gradient(circle, var(--ink) 45%, transparent 50%);
    }

    .actions {
      display: grid;
      gap: 8px;
    }

    .status {
      font-size: 0.95rem;
      color: var(--soft);
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 900px) {
      .app {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <header class="top">
    <h1>Mood tracker</h1>
  </header>

  <main class="app">
    <section>
      <div class="welcome">
        <h2>Hello! &#128075;</h2>
        <p>How are you feeling today?</p>
        <div class="today">{{TODAY}}</div>
        <button class="btn-primary" id="open-log" type="button">Log today's mood</button>
      </div>

      <div class="kpis">
        <div class="kpi mood">
          <span class="label">Average Mood</span>
          <span class="value" id="avg-mood">{{AVG_MOOD}}</span>
          <p class="hint">Across the last 5 check-ins</p>
        </div>
        <div class="kpi sleep">
          <span class="label">Average Sleep</span>
          <span class="value" id="avg-sleep">{{AVG_SLEEP}}</span>
          <p class="hint">Across the last 5 check-ins</p>
        </div>
      </div>
      <div class="status" id="status"></div>
    </section>

    <section class="chart-card">
      <h3>Mood and sleep trends</h3>
      <svg id="chart" viewBox="0 0 760 400" aria-label="Mood and sleep chart" role="img"></svg>
      <div class="tooltip" id="tooltip"></div>
    </section>
  </main>

  <dialog id="mood-dialog">
    <form id="mood-form" method="post" action="/entries">
      <header>
        <h2>Log your mood</h2>
        <p>How are you feeling right now?</p>
      </header>
      <div class="mood-list">
{{MOOD_OPTIONS}}      </div>
      <div class="actions">
        <button class="btn-primary" id="continue-btn" type="submit" disabled>Continue</button>
        <button class="btn-ghost" id="cancel-btn" type="button">Cancel</button>
      </div>
    </form>
  </dialog>

  <script>
    const dialog = document.getElementById('mood-dialog');
    const form = document.getElementById('mood-form');
    const continueBtn = document.getElementById('continue-btn');
    const avgMoodEl = document.getElementById('avg-mood');
    const avgSleepEl = document.getElementById('avg-sleep');
    const statusEl = document.getElementById('status');
    const chartEl = document.getElementById('chart');
    const tooltipEl = document.getElementById('tooltip');
    const SVG_NS = 'http://www.w3.org/2000/svg';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const sleepBand = (avg) => {
      const value = Number(avg);
      const safe = Number.isFinite(value) ? value : 0;
      return `${Math.floor(safe)} - ${Math.ceil(safe)} Hours`;
    };

    const svg = (tag, attrs, text) => {
      const el = document.createElementNS(SVG_NS, tag);
      Object.entries(attrs).forEach(([key, value]) => el.setAttribute(key, value));
      if (text !== undefined) {
        el.textContent = text;
      }
      return el;
    };

    const showTooltip = (event, tip) => {
      tooltipEl.innerHTML = '';
      const title = document.createElement('strong');
      title.textContent = tip.date;
      const mood = document.createElement('div');
      mood.textContent = `Mood: ${tip.mood_label}`;
      const sleep = document.createElement('div');
      sleep.textContent = `Sleep: ${tip.sleep_hours} hrs`;
      tooltipEl.append(title, mood, sleep);
      const card = chartEl.parentElement.getBoundingClientRect();
      tooltipEl.style.left = `${event.clientX - card.left + 12}px`;
      tooltipEl.style.top = `${event.clientY - card.top + 12}px`;
      tooltipEl.style.display = 'block';
    };

    const hideTooltip = () => {
      tooltipEl.style.display = 'none';
    };

    const renderChart = (chart) => {
      const width = 760;
      const height = 400;
      const left = 50;
      const right = 10;
      const top = 40;
      const bottom = 36;
      const [min, max] = chart.y_axis.domain;
      const plotHeight = height - top - bottom;
      const y = (value) => top + plotHeight - ((value - min) / (max - min)) * plotHeight;

      chartEl.replaceChildren();

      chart.y_axis.ticks.forEach((tick) => {
        const yPos = y(tick.value);
        chartEl.append(svg('line', { class: 'chart-grid', x1: left, y1: yPos, x2: width - right, y2: yPos }));
        chartEl.append(svg('text', { class: 'chart-label', x: left - 8, y: yPos + 4, 'text-anchor': 'end' }, tick.label));
      });

      const points = chart.points;
      if (!points.length) {
        chartEl.append(svg('text', { class: 'chart-label', x: '50%', y: '50%', 'text-anchor': 'middle' }, 'No check-ins yet'));
        return;
      }

      const slot = (width - left - right) / points.length;
      const barWidth = chart.bar.width;
      const radius = chart.bar.radius[0];

      points.forEach((point, index) => {
        const cx = left + slot * index + slot / 2;
        const barTop = y(Math.min(point.sleep_hours, max));
        const barHeight = Math.max(y(min) - barTop, 0);
        const bar = svg('rect', {
          class: 'chart-bar',
          x: cx - barWidth / 2,
          y: barTop,
          width: barWidth,
          height: barHeight,
          rx: Math.min(radius, barHeight / 2),
          ry: Math.min(radius, barHeight / 2),
          fill: point.bar_color,
          tabindex: 0
        });
        bar.addEventListener('mousemove', (event) => showTooltip(event, point.tooltip));
        bar.addEventListener('focus', (event) => {
          const box = bar.getBoundingClientRect();
          showTooltip({ clientX: box.right, clientY: box.top }, point.tooltip);
        });
        bar.addEventListener('mouseleave', hideTooltip);
        bar.addEventListener('blur', hideTooltip);
        chartEl.append(bar);

        chartEl.append(svg('text', {
          class: `chart-icon tone-${point.icon_color}`,
          x: cx,
          y: barTop - 10,
          'text-anchor': 'middle'
        }, point.icon));
        chartEl.append(svg('text', { class: 'chart-label', x: cx, y: height - 10, 'text-anchor': 'middle' }, point.date));
      });
    };

    const loadChart = async () => {
      const res = await fetch('/api/chart');
      if (!res.ok) {
        throw new Error('Unable to load chart');
      }
      renderChart(await res.json());
    };

    const resetForm = () => {
      form.reset();
      continueBtn.disabled = true;
    };

    document.getElementById('open-log').addEventListener('click', () => {
      resetForm();
      dialog.showModal();
    });

    document.getElementById('cancel-btn').addEventListener('click', () => {
      dialog.close();
    });

    dialog.addEventListener('click', (event) => {
      if (event.target === dialog) {
        dialog.close();
      }
    });

    form.addEventListener('change', () => {
      continueBtn.disabled = !form.querySelector('input[name="mood"]:checked');
    });

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const selected = form.querySelector('input[name="mood"]:checked');
      if (!selected) {
        return;
      }
      continueBtn.disabled = true;
      fetch('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ mood: selected.value })
      })
        .then(async (res) => {
          if (!res.ok) {
            const msg = await res.text();
            throw new Error(msg || 'Request failed');
          }
          const data = await res.json();
          avgMoodEl.textContent = data.stats.average_mood_label;
          avgSleepEl.textContent = sleepBand(data.stats.average_sleep_hours);
          dialog.close();
          setStatus('', '');
          return loadChart();
        })
        .catch((err) => {
          continueBtn.disabled = false;
          setStatus(err.message, 'error');
        });
    });

    loadChart().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_fills_every_placeholder() {
        let stats = RollingStats {
            average_mood_label: "Happy".to_string(),
            average_sleep_hours: "6.6".to_string(),
        };
        let html = render_index("Sunday, April 7", &stats);

        assert!(!html.contains("{{"));
        assert!(html.contains("Sunday, April 7"));
        assert!(html.contains(r#"id="avg-mood">Happy<"#));
        assert!(html.contains(r#"id="avg-sleep">6 - 7 Hours<"#));
        for mood in MoodLevel::ALL {
            assert!(html.contains(&format!(r#"value="{}""#, mood.key())));
        }
    }

    #[test]
    fn continue_starts_disabled() {
        let stats = RollingStats {
            average_mood_label: "Neutral".to_string(),
            average_sleep_hours: "0".to_string(),
        };
        let html = render_index("today", &stats);
        assert!(html.contains(r#"id="continue-btn" type="submit" disabled"#));
    }
}
