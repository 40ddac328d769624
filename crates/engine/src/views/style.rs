//! Page stylesheet, embedded in the binary.

pub const STYLESHEET: &str = r#"
* { box-sizing: border-box; }
body {
    margin: 0;
    display: flex;
    min-height: 100vh;
    font-family: "Source Sans Pro", system-ui, sans-serif;
    color: #333333;
    background: #ffffff;
}

/* Sidebar */
.sidebar {
    flex: 0 0 320px;
    background-color: #f8f9fa;
    padding: 20px;
}
.add-form {
    background-color: #ffffff;
    padding: 20px;
    border-radius: 10px;
    border: 1px solid #e0e0e0;
    margin-bottom: 20px;
}
.add-form label {
    display: block;
    color: #333333;
    font-weight: bold;
    font-size: 14px;
    margin: 8px 0 4px;
}
.add-form input {
    width: 100%;
    padding: 6px 8px;
    border: 1px solid #d0d0d0;
    border-radius: 4px;
    background-color: #f8f9fa;
    color: #333333;
}
.add-form .columns { display: flex; gap: 12px; }
.add-form .columns > div { flex: 1; }
.add-form button {
    margin-top: 16px;
    background-color: #ff4b4b;
    color: white;
    border: none;
    border-radius: 4px;
    font-weight: bold;
    width: 100%;
    padding: 0.5rem;
    cursor: pointer;
}

/* Notices */
.notice { padding: 12px 16px; border-radius: 8px; margin-bottom: 16px; }
.notice.success { background: #e6f4ea; color: #1e6b34; }
.notice.error { background: #fdecea; color: #a12622; }
.notice.info { background: #e8f0fe; color: #1a4e8a; }
.notice.unavailable { background: #fff4e5; color: #8a4b00; }

/* Main panel */
main { flex: 1; padding: 20px 32px; min-width: 0; }
.main-columns { display: flex; gap: 24px; align-items: flex-start; }
.map-region { flex: 2; overflow: auto; }
.list-region { flex: 1; min-width: 240px; }

/* The plot is drawn 1:1 in plane units and must never be rescaled. */
svg.plot { width: 580px; height: 610px; max-width: none; flex: none; }

.cards { max-height: 640px; overflow-y: auto; }
.card {
    display: flex;
    align-items: center;
    justify-content: space-between;
    border-radius: 10px;
    border: 1px solid #e0e0e0;
    padding: 15px;
    margin-bottom: 15px;
}
.card form { margin: 0; }
.card .delete {
    background: none;
    border: 1px solid #e0e0e0;
    border-radius: 4px;
    padding: 4px 8px;
    cursor: pointer;
}

@media (prefers-color-scheme: dark) {
    body { background: #0e1117; color: #f0f0f0; }
    .sidebar { background-color: #1a1a1a; }
    .add-form { background-color: #1a1a1a; border-color: #444; }
    .add-form label { color: #f0f0f0; }
    .add-form input { background-color: #2d2d2d; color: #f0f0f0; border-color: #444; }
    .card { border-color: #444; }
}
"#;
