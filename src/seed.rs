//! Seed Data
//!
//! Hard-coded initial catalog, the only "persisted" state in the app.
//! The HTML payloads are opaque demonstration blobs.

use crate::catalog::Catalog;
use crate::models::{CaseStatus, TestCase, TestGroup};

const XIAOHONGSHU_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <title>小红书爆款封面生成器</title>
    <script src="https://unpkg.com/vue@3/dist/vue.global.js"></script>
    <style>
        body { font-family: 'Noto Sans SC', sans-serif; background-color: #f3f4f6; }
        .preview-container { width: 375px; height: 500px; position: relative; overflow: hidden; background: #fff; }
        .main-title { background: #ff2442; color: white; font-size: 42px; font-weight: 900; padding: 10px 20px; }
    </style>
</head>
<body>
<div id="app">
    <h1>🔴 小红书封面生成器</h1>
    <p>上传图片 -> 输入标题 -> 选模板 -> 下载</p>
    <input type="file" accept="image/*">
    <input type="text" v-model="mainTitle" placeholder="Main Title">
    <div class="preview-container"><span class="main-title">{{ mainTitle }}</span></div>
</div>
<script>
  Vue.createApp({ data() { return { mainTitle: '我的封面' }; } }).mount('#app');
</script>
</body>
</html>"#;

const EINSTEIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <title>爱因斯坦与普林斯顿</title>
    <style>
        body { margin: 0; font-family: Georgia, serif; background: #faf6ef; color: #2c2c2c; }
        header { padding: 60px 20px; text-align: center; background: #1a2a4a; color: #f5e9c9; }
        section { max-width: 720px; margin: 40px auto; padding: 0 20px; line-height: 1.8; }
    </style>
</head>
<body>
<header>
    <h1>阿尔伯特·爱因斯坦</h1>
    <p>普林斯顿岁月 · 1933–1955</p>
</header>
<section>
    <h2>流亡与新家</h2>
    <p>1933 年，爱因斯坦离开欧洲，加入普林斯顿高等研究院，在此度过了生命中最后的二十二年。</p>
</section>
<section>
    <h2>给每个年龄段的读者</h2>
    <p>从相对论的通俗比喻到原始论文的链接，本站按难度分层呈现同一段历史。</p>
</section>
</body>
</html>"#;

const MEMORY_STARDUST_PROMPT: &str = "用 three.js 制作一个“记忆星辰”交互演示：\
粒子汇聚成星云，点击任意星点展开一段记忆文字，再次点击星点散开回到星云。";

const MEMORY_STARDUST_HTML: &str = r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
    <meta charset="UTF-8">
    <title>记忆星辰</title>
    <style>html, body { margin: 0; overflow: hidden; background: #000; }</style>
    <script src="https://unpkg.com/three@0.160.0/build/three.min.js"></script>
</head>
<body>
<script>
  const scene = new THREE.Scene();
  const camera = new THREE.PerspectiveCamera(60, innerWidth / innerHeight, 0.1, 100);
  camera.position.z = 6;
  const renderer = new THREE.WebGLRenderer({ antialias: true });
  renderer.setSize(innerWidth, innerHeight);
  document.body.appendChild(renderer.domElement);

  const geometry = new THREE.BufferGeometry();
  const count = 4000;
  const positions = new Float32Array(count * 3);
  for (let i = 0; i < count * 3; i++) positions[i] = (Math.random() - 0.5) * 10;
  geometry.setAttribute('position', new THREE.BufferAttribute(positions, 3));
  const stars = new THREE.Points(geometry, new THREE.PointsMaterial({ color: 0x88aaff, size: 0.02 }));
  scene.add(stars);

  function animate() {
    requestAnimationFrame(animate);
    stars.rotation.y += 0.0008;
    renderer.render(scene, camera);
  }
  animate();
</script>
</body>
</html>"#;

/// Build the startup catalog
///
/// Id counter starts past the seeded `g1`/`c1`..`c3` suffixes.
pub fn initial_catalog() -> Catalog {
    let groups = vec![TestGroup {
        id: "g1".to_string(),
        title: "👀视觉代码生成".to_string(),
        cases: vec![
            TestCase {
                id: "c1".to_string(),
                title: "小红书爆款封面生成器".to_string(),
                status: CaseStatus::Success,
                prompt: "创建一个小红书封面排版工具，用户只要上传图片和主题就可以生成合适的排版内容。"
                    .to_string(),
                code: XIAOHONGSHU_HTML.to_string(),
                preview_html: XIAOHONGSHU_HTML.to_string(),
            },
            TestCase {
                id: "c2".to_string(),
                title: "个人传记网站生成".to_string(),
                status: CaseStatus::Success,
                prompt: "介绍[普林斯顿和爱因斯坦的关系] 生成一个人物传记的网站，适合不同年龄段的人群了解学习"
                    .to_string(),
                code: EINSTEIN_HTML.to_string(),
                preview_html: EINSTEIN_HTML.to_string(),
            },
            TestCase {
                id: "c3".to_string(),
                title: "记忆星辰（three.js+3D引擎）".to_string(),
                status: CaseStatus::Success,
                prompt: MEMORY_STARDUST_PROMPT.to_string(),
                code: MEMORY_STARDUST_HTML.to_string(),
                preview_html: MEMORY_STARDUST_HTML.to_string(),
            },
        ],
    }];
    Catalog::new(groups, 3)
}
