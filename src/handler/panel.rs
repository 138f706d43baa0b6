//! Control panel page served at `/`
//!
//! Each button issues `GET /<COMMAND_NAME>`; the server forwards the name to the IR blaster.

pub const CONTROL_PANEL_HTML: &str = r##"<html>
<head>
<meta name="apple-mobile-web-app-capable" content="yes">
<meta name="viewport" content="width=device-width">
<meta name="viewport" content="initial-scale=1.0">
<title>AirConPi</title>
<script>
function sendControl(forName) {
  var r = new XMLHttpRequest();
  r.open("GET", "/" + forName);
  r.setRequestHeader("Cache-Control", "no-cache");
  r.send();
}
</script>
</head>
<body bgcolor="#FFFFFF">
<h1>Control</h1>
<br/>
<input style="width:100%" type="button" onclick="sendControl('POWER_OFF')" value="Stop, clean" />
<br/>
<input style="width:100%" type="button" onclick="sendControl('ON_COOL_F1_70'); sendControl('POWER_OFF')" value="Stop now" />
<br/>
<br/>
<h1>Cooling</h1>
<input style="width:100%" type="button" onclick="sendControl('ON_COOL_F1_70_CLEAN')" value="F1, 70" />
<br/>
<input style="width:100%" type="button" onclick="sendControl('ON_COOL_F2_70_CLEAN')" value="F2, 70" />
<br/>
<input style="width:100%" type="button" onclick="sendControl('ON_COOL_F3_70_CLEAN')" value="F3, 70" />
<br/>
<input style="width:100%" type="button" onclick="sendControl('ON_COOL_F3_65_CLEAN')" value="F3, 65" />
<br/>
<br/>
<h1>Heating</h1>
<br/>
<input style="width:100%" type="button" onclick="sendControl('ON_HEAT_F1_74_CLEAN')" value="F1, 74" />
<br/>
<input style="width:100%" type="button" onclick="sendControl('ON_HEAT_F2_74_CLEAN')" value="F2, 74" />
<br/>
<input style="width:100%" type="button" onclick="sendControl('ON_HEAT_F3_74_CLEAN')" value="F3, 74" />
</body></html>
"##;
