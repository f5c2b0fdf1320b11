// tests/common/fixtures.rs
//! テストフィクスチャ

/// Connector entry file as shipped, with the CI placeholder version.
pub const CONNECTOR_RB: &str = r#"require "sketchup"

require "extensions"

module SpeckleSystems
  module SpeckleConnector
    # Version - patched by CI
    CONNECTOR_VERSION = "9.9.9"

    file = __FILE__.dup
    PATH_ROOT = File.dirname(file).freeze

    unless file_loaded?(__FILE__)
      ex = SketchupExtension.new("Speckle SketchUp", File.join(PATH, "main"))
      ex.version     = CONNECTOR_VERSION
      Sketchup.register_extension(ex, true)
      file_loaded(__FILE__)
    end
  end
end
"#;

/// Inno Setup script header; the define lands before `#define AppPublisher`.
pub const SKETCHUP_ISS: &str = r#"; SEE THE DOCUMENTATION FOR DETAILS ON CREATING INNO SETUP SCRIPT FILES!

#define Repository "..\speckle-sketchup"
#define AppName "Speckle for SketchUp"
#define Slug "sketchup"
#define InstallDir "{userappdata}\SketchUp"
#define AppInfoVersion "2.0.0"
#define AppPath "{app}"
#define MainExe ""
#define SourceDir "..\speckle-sketchup\speckle_connector"
#define RubyFile "..\speckle-sketchup\speckle_connector.rb"
#define AppPublisher "Speckle"
#define AppURL "https://speckle.systems"

[Setup]
AppName={#AppName}
AppVersion={#AppVersion}
AppPublisher={#AppPublisher}
"#;
