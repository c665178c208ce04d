// Composition tests: the full train -> save -> load -> read -> classify chain.
//
// Everything runs against a tempfile directory; no fixtures are shipped.

use std::fs;
use std::path::Path;

use scriptsniff::engine::EngineConfig;
use scriptsniff::input::read_lossy;
use scriptsniff::output::confidence_bar;
use scriptsniff::profiles::{store, train};
use scriptsniff::{classify, ProfileStore};

fn write(path: &Path, contents: &[u8]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn seed_samples(root: &Path) {
    write(
        &root.join("luau/types.lua"),
        br#"
        export type Player = { name: string, score: number }
        local function bump(p: Player): Player
            p.score += 1
            return p
        end
        "#,
    );
    write(
        &root.join("luau/services.lua"),
        br#"
        local Players = game:GetService("Players")
        local ReplicatedStorage = game:GetService("ReplicatedStorage")
        Players.PlayerAdded:Connect(function(player) print(player.Name) end)
        "#,
    );
    write(
        &root.join("glua/hooks.lua"),
        br#"
        hook.Add("PlayerInitialSpawn", "welcome", function(ply)
            ply:ChatPrint("Welcome " .. ply:Nick())
        end)
        concommand.Add("kill_me", function(ply) ply:Kill() end)
        "#,
    );
    write(
        &root.join("glua/net.lua"),
        br#"
        util.AddNetworkString("sync")
        net.Receive("sync", function(len, ply)
            local data = net.ReadTable()
        end)
        "#,
    );
}

#[test]
fn trained_store_detects_its_own_dialects() {
    let dir = tempfile::tempdir().unwrap();
    let samples = dir.path().join("samples");
    seed_samples(&samples);

    let config = EngineConfig::default();
    let trained = train::train_from_dir(&samples, &config).unwrap();
    let model = dir.path().join("out").join("model.json");
    store::save(&trained, &model).unwrap();
    let profiles: ProfileStore = store::load(&model).unwrap();
    assert_eq!(profiles, trained);

    let target = dir.path().join("target.lua");
    write(
        &target,
        br#"
        local Players = game:GetService("Players")
        type Stats = { kills: number }
        Players.PlayerRemoving:Connect(function(player) end)
        "#,
    );
    let content = read_lossy(&target).unwrap();
    let results = classify(&content, &profiles, &config);
    assert_eq!(results[0].category, "luau");

    let target = dir.path().join("addon.lua");
    write(
        &target,
        br#"
        hook.Add("PlayerDeath", "announce", function(ply)
            net.Start("sync") net.Send(ply)
        end)
        "#,
    );
    let content = read_lossy(&target).unwrap();
    let results = classify(&content, &profiles, &config);
    assert_eq!(results[0].category, "glua");
    let total: f64 = results.iter().map(|r| r.confidence).sum();
    assert!((total - 100.0).abs() < 1e-6);
}

#[test]
fn invalid_bytes_do_not_block_detection() {
    let dir = tempfile::tempdir().unwrap();
    let samples = dir.path().join("samples");
    seed_samples(&samples);
    let profiles = train::train_from_dir(&samples, &EngineConfig::default()).unwrap();

    let target = dir.path().join("mixed.lua");
    write(&target, b"hook.Add(\xff\xfe\"Think\", function(ply) ply:Kill() end)");
    let content = read_lossy(&target).unwrap();
    assert!(!content.contains('\u{FFFD}'));

    let results = classify(&content, &profiles, &EngineConfig::default());
    assert_eq!(results[0].category, "glua");
}

#[test]
fn detection_json_shape() {
    let mut profiles = ProfileStore::new();
    profiles.insert(
        "only",
        scriptsniff::engine::build_distribution(scriptsniff::engine::extract_ngrams("abcdef", 3)),
    );
    let results = classify("abcd", &profiles, &EngineConfig::default());

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["category"], "only");
    assert_eq!(json[0]["confidence"], 100.0);
    assert!(json[0]["score"].as_f64().unwrap() > 0.0);
}

#[test]
fn top_result_renders_a_full_bar() {
    let mut profiles = ProfileStore::new();
    profiles.insert(
        "only",
        scriptsniff::engine::build_distribution(scriptsniff::engine::extract_ngrams("abcdef", 3)),
    );
    let results = classify("abcd", &profiles, &EngineConfig::default());
    assert_eq!(confidence_bar(results[0].confidence, 40), "#".repeat(40));
}
