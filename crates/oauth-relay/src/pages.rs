//! HTML pages rendered back to the browser.
//!
//! All interpolated values are HTML-escaped to prevent XSS.

/// Render the page shown after a callback was relayed successfully.
#[must_use]
pub fn render_success_page(session_label: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>OAuth Authentication Successful</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }}
.container {{ background: white; padding: 40px; border-radius: 10px; box-shadow: 0 10px 40px rgba(0,0,0,0.1); text-align: center; max-width: 500px; }}
h1 {{ color: #333; margin-bottom: 20px; }}
.checkmark {{ font-size: 64px; color: #4CAF50; margin-bottom: 20px; }}
p {{ color: #666; line-height: 1.6; }}
.session {{ background: #f5f5f5; padding: 10px; border-radius: 5px; font-family: monospace; font-size: 12px; margin-top: 20px; }}
</style>
</head>
<body>
<div class="container">
<div class="checkmark">&#10003;</div>
<h1>Authentication Successful!</h1>
<p>Your service has been successfully authenticated.</p>
<p>You can now close this window and return to your terminal.</p>
<div class="session">Session: {session}</div>
</div>
</body>
</html>"#,
        session = html_escape(session_label),
    )
}

/// Render the page shown when relaying a callback failed.
#[must_use]
pub fn render_error_page(error: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>OAuth Authentication Failed</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); }}
.container {{ background: white; padding: 40px; border-radius: 10px; box-shadow: 0 10px 40px rgba(0,0,0,0.1); text-align: center; max-width: 500px; }}
h1 {{ color: #333; margin-bottom: 20px; }}
.error-icon {{ font-size: 64px; color: #f44336; margin-bottom: 20px; }}
p {{ color: #666; line-height: 1.6; }}
.error {{ background: #ffebee; padding: 10px; border-radius: 5px; font-family: monospace; font-size: 12px; margin-top: 20px; color: #c62828; }}
</style>
</head>
<body>
<div class="container">
<div class="error-icon">&#10007;</div>
<h1>Authentication Failed</h1>
<p>There was an error completing the OAuth authentication.</p>
<p>Please try again or check the logs for more details.</p>
<div class="error">{error}</div>
</div>
</body>
</html>"#,
        error = html_escape(error),
    )
}

/// Render the root informational page with the relay's listening port.
#[must_use]
pub fn render_root_page(listen_port: u16) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>OAuth Callback Relay</title>
<style>
body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif; max-width: 800px; margin: 50px auto; padding: 20px; line-height: 1.6; }}
h1 {{ color: #333; }}
code {{ background: #f5f5f5; padding: 2px 6px; border-radius: 3px; }}
.info {{ background: #e3f2fd; padding: 15px; border-radius: 5px; margin: 20px 0; }}
</style>
</head>
<body>
<h1>OAuth Callback Relay</h1>
<div class="info">
<strong>Status:</strong> Running<br>
<strong>Callback URL:</strong> <code>http://localhost:{listen_port}/oauth/callback</code>
</div>
<h2>Usage</h2>
<p>This relay forwards OAuth callbacks from identity providers into your container.</p>
<h3>Endpoints:</h3>
<ul>
<li><code>/oauth/callback</code> - OAuth callback handler</li>
<li><code>/oauth/register</code> - Register a callback port (POST)</li>
<li><code>/health</code> - Health check</li>
</ul>
</body>
</html>"#,
    )
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
