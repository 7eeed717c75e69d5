pub const GLOBAL_CSS: &str = r#"
:root {
  --bg: #f9fafb;
  --bg-elev-1: #ffffff;
  --bg-elev-2: #f3f4f6;
  --panel: #ffffff;
  --border: rgba(0, 0, 0, 0.08);
  --border-strong: rgba(0, 0, 0, 0.14);
  --text: #111827;
  --text-dim: #374151;
  --text-muted: #6b7280;
  --accent: #2563eb;
  --accent-strong: #1d4ed8;
  --positive: #16a34a;
  --negative: #ef4444;
  --warning: #eab308;
  --hot: #f97316;
  --purple: #9333ea;
  --surface-hover: rgba(0, 0, 0, 0.04);
  --shadow-soft: 0 10px 30px rgba(0, 0, 0, 0.10);
  --radius: 12px;
  --radius-pill: 999px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --font-body: "Inter", system-ui, -apple-system, sans-serif;
  --font-size-sm: 13px;
  --font-size-md: 15px;
  --font-size-lg: 18px;
  --transition: 140ms ease-out;
}

html.dark, .theme-dark {
  --bg: #111827;
  --bg-elev-1: #1f2937;
  --bg-elev-2: #374151;
  --panel: #1f2937;
  --border: rgba(255, 255, 255, 0.08);
  --border-strong: rgba(255, 255, 255, 0.16);
  --text: #f9fafb;
  --text-dim: #d1d5db;
  --text-muted: #9ca3af;
  --accent: #60a5fa;
  --accent-strong: #93c5fd;
  --surface-hover: rgba(255, 255, 255, 0.05);
  --shadow-soft: 0 14px 42px rgba(0, 0, 0, 0.38);
}

* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: var(--font-body);
  font-size: var(--font-size-md);
  line-height: 1.5;
  min-height: 100%;
}

a { color: var(--accent); text-decoration: none; }
a:hover { color: var(--accent-strong); }
button { font-family: var(--font-body); cursor: pointer; }

input {
  background: var(--bg-elev-1);
  border: 1px solid var(--border-strong);
  color: var(--text);
  border-radius: 8px;
  padding: var(--space-3) var(--space-4);
  font-size: var(--font-size-md);
  transition: border-color var(--transition);
}
input:focus { outline: none; border-color: var(--accent); }

.app-root { min-height: 100vh; background: var(--bg); transition: background var(--transition); }
.container { max-width: 1200px; margin: 0 auto; padding: 0 var(--space-6); }
.panel {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
}

.topbar { background: var(--bg-elev-1); border-bottom: 1px solid var(--border); }
.topbar .container { display: flex; align-items: center; justify-content: space-between; padding-top: var(--space-4); padding-bottom: var(--space-4); }
.brand { display: flex; align-items: center; gap: var(--space-2); font-size: 24px; font-weight: 700; }
.brand-mark { color: var(--accent); }
.topbar-nav { display: flex; align-items: center; gap: var(--space-6); }
.topbar-nav a { color: var(--text-muted); }
.topbar-nav a:hover { color: var(--text); }
.theme-switch { background: transparent; border: none; border-radius: 8px; padding: var(--space-2); font-size: 18px; color: var(--text-dim); }
.theme-switch:hover { background: var(--surface-hover); }

.social-banner { background: linear-gradient(90deg, #2563eb, #1e40af); color: #fff; padding: var(--space-6) 0; margin-bottom: var(--space-8); }
.social-banner .container { display: flex; flex-wrap: wrap; align-items: center; justify-content: space-between; gap: var(--space-4); }
.social-banner h2 { margin: 0 0 var(--space-2); }
.social-banner p { margin: 0; color: #dbeafe; }
.social-links { display: flex; flex-wrap: wrap; gap: var(--space-4); }
.btn { display: inline-flex; align-items: center; justify-content: center; gap: var(--space-2); border: none; border-radius: 8px; padding: var(--space-3) var(--space-6); font-weight: 600; transition: background var(--transition); }
.btn.primary { background: var(--accent); color: #fff; }
.btn.primary:hover { background: var(--accent-strong); color: #fff; }
.btn.primary:disabled { opacity: 0.6; cursor: progress; }
.btn.light { background: #fff; color: #2563eb; }
.btn.whatsapp { background: #22c55e; color: #fff; }

.tracker { padding: var(--space-6); margin-bottom: var(--space-8); }
.tracker h2 { margin: 0 0 var(--space-3); font-size: 20px; }
.tracker p { color: var(--text-muted); margin: 0 0 var(--space-6); }
.tracker form { display: flex; flex-wrap: wrap; gap: var(--space-4); }
.tracker input { flex: 1; min-width: 240px; }
.tracker .btn { min-width: 140px; }

.hero { text-align: center; margin-bottom: var(--space-8); }
.hero h2 { font-size: 36px; margin: 0 0 var(--space-4); }
.hero p { color: var(--text-muted); max-width: 640px; margin: 0 auto; }

.search { width: 100%; margin-bottom: var(--space-8); }
.category-bar { display: flex; gap: var(--space-3); overflow-x: auto; padding-bottom: var(--space-4); margin-bottom: var(--space-6); }
.pill { border: none; border-radius: var(--radius-pill); padding: var(--space-2) var(--space-4); white-space: nowrap; background: var(--bg-elev-2); color: var(--text-dim); }
.pill:hover { background: var(--surface-hover); }
.pill.active { background: var(--accent); color: #fff; }

.deal-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: var(--space-6); }
.deal-empty { grid-column: 1 / -1; text-align: center; color: var(--text-muted); padding: var(--space-8); }
.deal-card { overflow: hidden; transition: box-shadow var(--transition); }
.deal-media { position: relative; }
.deal-media img { width: 100%; height: 192px; object-fit: cover; display: block; }
.badge { position: absolute; top: var(--space-2); border-radius: var(--radius-pill); padding: 2px var(--space-2); font-size: var(--font-size-sm); font-weight: 700; }
.badge.discount { right: var(--space-2); background: var(--negative); color: #fff; }
.badge.platform { left: var(--space-2); background: rgba(255, 255, 255, 0.9); color: #374151; }
.deal-body { padding: var(--space-4); }
.deal-body h3 { font-size: var(--font-size-lg); margin: 0 0 var(--space-2); }
.price-row { display: flex; align-items: baseline; gap: var(--space-2); margin-bottom: var(--space-3); }
.price-now { font-size: 24px; font-weight: 700; color: var(--positive); }
.price-was { color: var(--text-muted); text-decoration: line-through; }
.expires { font-size: var(--font-size-sm); color: var(--text-muted); margin-bottom: var(--space-3); }
.deal-foot { display: flex; justify-content: space-between; align-items: center; }
.hot { color: var(--hot); font-size: var(--font-size-sm); }

.footer { background: var(--bg-elev-1); border-top: 1px solid var(--border); margin-top: 64px; padding: var(--space-8) 0; }
.footer-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: var(--space-8); }
.footer h3 { font-size: var(--font-size-lg); margin: 0 0 var(--space-4); }
.footer ul { list-style: none; margin: 0; padding: 0; }
.footer li { margin-bottom: var(--space-2); }
.footer p, .footer li a { color: var(--text-muted); }
.newsletter { display: flex; gap: var(--space-2); }
.newsletter input { flex: 1; min-width: 0; }
.copyright { border-top: 1px solid var(--border); margin-top: var(--space-8); padding-top: var(--space-8); text-align: center; color: var(--text-muted); }

.history-page { padding: var(--space-8) 0; }
.history-card { padding: var(--space-6); }
.back-link { display: inline-block; margin-bottom: var(--space-4); font-size: var(--font-size-sm); }
.product { display: flex; flex-wrap: wrap; gap: var(--space-8); margin-bottom: var(--space-8); }
.product-image { width: 33%; min-width: 220px; aspect-ratio: 1; border-radius: var(--radius); overflow: hidden; background: var(--bg-elev-2); }
.product-image img { width: 100%; height: 100%; object-fit: cover; }
.product-info { flex: 1; }
.product-info h1 { font-size: 24px; margin: 0 0 var(--space-4); }
.product-price { display: flex; align-items: baseline; gap: var(--space-3); margin-bottom: var(--space-4); }
.product-price .now { font-size: 30px; font-weight: 700; color: var(--accent); }
.product-price .was { font-size: 20px; color: var(--text-muted); text-decoration: line-through; }
.product-price .off { color: var(--positive); font-weight: 600; }
.product-link { word-break: break-all; }

.stat-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: var(--space-6); margin-bottom: var(--space-8); }
.stat-card { padding: var(--space-4); }
.stat-card h3 { margin: 0 0 var(--space-2); font-size: var(--font-size-md); color: var(--text-dim); }
.stat-card .value { font-size: 24px; font-weight: 700; margin: 0; }
.stat-card.tone-red h3 { color: var(--negative); }
.stat-card.tone-green h3 { color: var(--positive); }
.stat-card.tone-purple h3 { color: var(--purple); }

.timeline { margin-bottom: var(--space-8); }
.timeline-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: var(--space-4); }
.timeline-head h2 { font-size: var(--font-size-lg); margin: 0; }
.window-buttons { display: flex; gap: var(--space-2); }
.window-btn { border: none; border-radius: 8px; padding: var(--space-1) var(--space-3); font-size: var(--font-size-sm); font-weight: 600; background: var(--bg-elev-2); color: var(--text-dim); }
.window-btn.active { background: var(--accent); color: #fff; }
.chart-box { padding: var(--space-4); height: 400px; }
.chart-box svg { width: 100%; height: 100%; }
.chart-line { fill: none; stroke: rgb(59, 130, 246); stroke-width: 2.5; }
.chart-dot { fill: rgba(59, 130, 246, 0.5); stroke: rgb(59, 130, 246); }
.chart-label { fill: var(--text-muted); font-size: 11px; }
.chart-empty { display: flex; height: 100%; align-items: center; justify-content: center; color: var(--text-muted); }
.window-stats { display: flex; gap: var(--space-6); margin-top: var(--space-3); font-size: var(--font-size-sm); color: var(--text-muted); }

.advice h2 { font-size: var(--font-size-lg); margin: 0 0 var(--space-4); }
.advice-track { position: relative; height: 8px; background: var(--bg-elev-2); border-radius: var(--radius-pill); margin-bottom: var(--space-4); }
.advice-fill { position: absolute; top: 0; left: 0; height: 100%; border-radius: var(--radius-pill); }
.advice-skip { background: #ef4444; }
.advice-wait { background: #eab308; }
.advice-okay { background: #3b82f6; }
.advice-yes { background: #22c55e; }
.advice-scale { display: flex; justify-content: space-between; font-size: var(--font-size-sm); font-weight: 600; color: var(--text-muted); }
.advice-scale .current { color: var(--text); }
.actions { display: flex; justify-content: center; margin-top: var(--space-8); }

@media (max-width: 1100px) {
  .deal-grid { grid-template-columns: repeat(2, 1fr); }
  .footer-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 780px) {
  .topbar-nav a { display: none; }
  .deal-grid, .stat-grid, .footer-grid { grid-template-columns: 1fr; }
  .product-image { width: 100%; }
  .timeline-head { flex-direction: column; align-items: flex-start; gap: var(--space-3); }
}
"#;
