use std::path::Path;

/// 選択されたマテリアルをホストのアクティブドキュメントへ渡すための窓口。
///
/// ホスト側のオブジェクトモデルは扱わないので、エラーは `anyhow` でそのまま返す。
pub trait MaterialHost {
    type Material;

    // アーカイブからマテリアルを読み込む
    fn load_material(&mut self, path: &Path) -> anyhow::Result<Self::Material>;

    // 読み込んだマテリアルを現在のマテリアルにする
    fn make_current(&mut self, material: Self::Material) -> anyhow::Result<()>;

    // ペイントツールに切り替える
    fn activate_paint_tool(&mut self) -> anyhow::Result<()>;
}
